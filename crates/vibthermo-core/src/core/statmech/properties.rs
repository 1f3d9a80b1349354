use serde::Serialize;
use std::ops::{Add, AddAssign};

/// Every vibrational property of a model at one temperature.
///
/// Snapshots of independent contributions at the same temperature combine
/// with `+`: partition functions multiply, all other quantities add.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThermoProperties {
    /// Temperature in K.
    #[serde(rename = "T")]
    pub t: f64,
    pub q: f64,
    #[serde(rename = "CvoR")]
    pub cv_over_r: f64,
    #[serde(rename = "CpoR")]
    pub cp_over_r: f64,
    #[serde(rename = "UoRT")]
    pub u_over_rt: f64,
    #[serde(rename = "HoRT")]
    pub h_over_rt: f64,
    #[serde(rename = "SoR")]
    pub s_over_r: f64,
    #[serde(rename = "AoRT")]
    pub a_over_rt: f64,
    #[serde(rename = "GoRT")]
    pub g_over_rt: f64,
    /// Zero-point energy in eV.
    #[serde(rename = "ZPE")]
    pub zpe: f64,
}

impl ThermoProperties {
    /// The identity of `+` at temperature `t`.
    pub fn neutral(t: f64) -> Self {
        Self {
            t,
            q: 1.0,
            cv_over_r: 0.0,
            cp_over_r: 0.0,
            u_over_rt: 0.0,
            h_over_rt: 0.0,
            s_over_r: 0.0,
            a_over_rt: 0.0,
            g_over_rt: 0.0,
            zpe: 0.0,
        }
    }
}

impl Add for ThermoProperties {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl AddAssign for ThermoProperties {
    fn add_assign(&mut self, rhs: Self) {
        debug_assert_eq!(self.t, rhs.t, "contributions must share a temperature");
        self.q *= rhs.q;
        self.cv_over_r += rhs.cv_over_r;
        self.cp_over_r += rhs.cp_over_r;
        self.u_over_rt += rhs.u_over_rt;
        self.h_over_rt += rhs.h_over_rt;
        self.s_over_r += rhs.s_over_r;
        self.a_over_rt += rhs.a_over_rt;
        self.g_over_rt += rhs.g_over_rt;
        self.zpe += rhs.zpe;
    }
}
