//! Theis (1935) solution for transient radial flow to a fully penetrating
//! well in a confined aquifer: s(r, t) = Q/(4πT)·W(u) with u = r²S/(4Tt).
pub mod params;
pub mod processes;
pub mod run;
pub mod typecurve;
