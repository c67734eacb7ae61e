mod helpers;

mod admin_test;
mod auth_test;
