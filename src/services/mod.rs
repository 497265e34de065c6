pub mod activities_service;
pub mod roster_service;
pub mod seed_service;
