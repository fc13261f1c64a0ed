mod expressions_tests;
mod literals_tests;
mod select_tests;
mod trivia_tests;
