mod helpers;
mod register_test;
mod score_test;
