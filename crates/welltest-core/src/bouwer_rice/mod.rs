//! Bouwer & Rice (1976) slug-test recovery model for unconfined,
//! partially penetrating wells: h(t)/H0 = exp(−F·K·t/(π·rc²)).
pub mod params;
pub mod processes;
pub mod run;
