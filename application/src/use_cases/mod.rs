//! Use cases (application services)

pub mod new_bill;
