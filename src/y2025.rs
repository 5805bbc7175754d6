// Copyright (c) 2022 Bastiaan Marinus van de Weerd

pub(crate) mod day01;
pub(crate) mod day02;
pub(crate) mod day03;
pub(crate) mod day04;
