// Copyright (c) 2022 Bastiaan Marinus van de Weerd

pub(crate) mod day01;
pub(crate) mod day02;
pub(crate) mod day03;
pub(crate) mod day04;
pub(crate) mod day05;
pub(crate) mod day06;
pub(crate) mod day07;
pub(crate) mod day08;
pub(crate) mod day09;
pub(crate) mod day10;
pub(crate) mod day11;
pub(crate) mod day12;
pub(crate) mod day13;
pub(crate) mod day14;
pub(crate) mod day15;
pub(crate) mod day16;
pub(crate) mod day17;
pub(crate) mod day18;
pub(crate) mod day19;
pub(crate) mod day21;
