pub mod prelude;

pub mod city_searches;
