pub mod birthday_queries;
