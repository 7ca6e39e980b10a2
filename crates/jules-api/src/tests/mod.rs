mod client_test;
mod pagination_test;
