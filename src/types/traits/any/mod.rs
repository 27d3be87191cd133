pub mod any_month;
