mod helpers;

mod api_test;
mod recipe_test;
mod user_test;
