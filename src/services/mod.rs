pub mod chart_service;
pub mod grant_service;
pub mod schedule_service;
