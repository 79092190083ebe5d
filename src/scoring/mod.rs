pub mod city_score;
