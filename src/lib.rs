pub mod logger;
pub mod resizer;
