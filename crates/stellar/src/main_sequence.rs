//! Main-sequence radius and luminosity as functions of age, mass and
//! metallicity.
//!
//! [`MainSequenceTrack`] evaluates every age-independent quantity of a star
//! once; the free functions [`radius`], [`luminosity`] and [`evaluate`]
//! build a track per call and read one age off it.
//!
//! # References
//! - Hurley, J. R., Pols, O. R., & Tout, C. A. (2000). MNRAS, 315, 543.

use serde::{Deserialize, Serialize};
use units::{Mass, Time};

use crate::error::{Result, StellarError, require_non_negative, require_positive};
use crate::fit::PiecewiseFit;
use crate::luminosity_shape::{LuminosityAlpha, LuminosityBeta, LuminosityDelta, luminosity_eta};
use crate::metallicity::Metallicity;
use crate::radius_shape::{RadiusAlpha, RadiusBeta, RadiusDelta, RadiusGamma};
use crate::terminal::{TerminalRadiusFit, terminal_luminosity};
use crate::timescales::{
    age_fraction, base_giant_branch_time, hook_fractions, hook_time, main_sequence_lifetime,
};
use crate::zero_age::{zero_age_luminosity, zero_age_radius};

/// Inputs of the main-sequence model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StellarParameters {
    pub mass: Mass,
    pub metallicity: Metallicity,
    /// Main-sequence age
    pub age: Time,
}

impl StellarParameters {
    pub fn new(mass_solar: f64, metallicity: f64, age_myr: f64) -> Result<Self> {
        Ok(Self {
            mass: Mass::from_solar_masses(require_positive("mass", mass_solar)?),
            metallicity: Metallicity::new(metallicity)?,
            age: Time::from_myr(require_non_negative("age", age_myr)?),
        })
    }

    pub fn track(&self) -> Result<MainSequenceTrack> {
        MainSequenceTrack::with_metallicity(self.mass.to_solar_masses(), self.metallicity)
    }

    pub fn evaluate(&self) -> Result<StellarState> {
        self.track()?.state_at(self.age.to_myr())
    }
}

/// Radius and luminosity of a star at one age.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StellarState {
    pub age: Time,
    /// τ = t / t_MS
    pub age_fraction: f64,
    /// Radius in solar radii (R☉)
    pub radius: f64,
    /// Luminosity in solar luminosities (L☉)
    pub luminosity: f64,
}

/// Age-independent part of the main-sequence model for one (M, Z).
///
/// # Examples
/// ```
/// use stellar::MainSequenceTrack;
///
/// let sun = MainSequenceTrack::new(1.0, 0.02).unwrap();
/// let radius = sun.radius_at(4567.0).unwrap();
/// assert!((radius - 1.0).abs() < 0.05);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MainSequenceTrack {
    mass: f64,
    metallicity: Metallicity,
    zero_age_radius: f64,
    zero_age_luminosity: f64,
    terminal_radius: f64,
    terminal_luminosity: f64,
    base_giant_branch_time: f64,
    hook_time: f64,
    lifetime: f64,
    alpha_r: f64,
    beta_r: f64,
    gamma_r: f64,
    delta_r: f64,
    alpha_l: f64,
    beta_l: f64,
    delta_l: f64,
    eta: f64,
}

impl MainSequenceTrack {
    /// Mass in M☉, metallicity as the mass fraction Z.
    pub fn new(mass: f64, metallicity: f64) -> Result<Self> {
        Self::with_metallicity(mass, Metallicity::new(metallicity)?)
    }

    pub fn with_metallicity(mass: f64, metallicity: Metallicity) -> Result<Self> {
        let mass = require_positive("mass", mass)?;
        let z = &metallicity;
        let real = |quantity: &'static str, value: f64| {
            if value.is_finite() {
                Ok(value)
            } else {
                Err(StellarError::OutsideFit {
                    quantity,
                    mass,
                    metallicity: z.z(),
                })
            }
        };

        Ok(Self {
            mass,
            metallicity,
            zero_age_radius: real("zero-age radius", zero_age_radius(mass, z))?,
            zero_age_luminosity: real("zero-age luminosity", zero_age_luminosity(mass, z))?,
            terminal_radius: real("terminal radius", TerminalRadiusFit::new(metallicity).value(mass))?,
            terminal_luminosity: real("terminal luminosity", terminal_luminosity(mass, z))?,
            base_giant_branch_time: real("base giant branch time", base_giant_branch_time(mass, z))?,
            hook_time: real("hook time", hook_time(mass, z))?,
            lifetime: real("main-sequence lifetime", main_sequence_lifetime(mass, z))?,
            alpha_r: real("alpha_R", RadiusAlpha::new(z).value(mass))?,
            beta_r: real("beta_R", RadiusBeta::new(z).value(mass))?,
            gamma_r: real("gamma_R", RadiusGamma::new(z).value(mass))?,
            delta_r: real("delta_R", RadiusDelta::new(z).value(mass))?,
            alpha_l: real("alpha_L", LuminosityAlpha::new(z).value(mass))?,
            beta_l: real("beta_L", LuminosityBeta::new(z).value(mass))?,
            delta_l: real("delta_L", LuminosityDelta::new(z).value(mass))?,
            eta: luminosity_eta(mass, z),
        })
    }

    /// Radius (R☉) at `age_myr` Myr after the zero-age main sequence.
    pub fn radius_at(&self, age_myr: f64) -> Result<f64> {
        let (tau, tau1, tau2) = self.fractions(age_myr)?;
        let log_ratio = (self.terminal_radius / self.zero_age_radius).log10();
        let exponent = self.alpha_r * tau
            + self.beta_r * tau.powi(10)
            + self.gamma_r * tau.powi(40)
            + (log_ratio - self.alpha_r - self.beta_r - self.gamma_r) * tau.powi(3)
            - self.delta_r * (tau1.powi(3) - tau2.powi(3));
        self.finite("radius", self.zero_age_radius * 10f64.powf(exponent))
    }

    /// Luminosity (L☉) at `age_myr` Myr after the zero-age main sequence.
    pub fn luminosity_at(&self, age_myr: f64) -> Result<f64> {
        let (tau, tau1, tau2) = self.fractions(age_myr)?;
        let log_ratio = (self.terminal_luminosity / self.zero_age_luminosity).log10();
        let exponent = self.alpha_l * tau
            + self.beta_l * tau.powf(self.eta)
            + (log_ratio - self.alpha_l - self.beta_l) * tau.powi(2)
            - self.delta_l * (tau1.powi(2) - tau2.powi(2));
        self.finite("luminosity", self.zero_age_luminosity * 10f64.powf(exponent))
    }

    pub fn state_at(&self, age_myr: f64) -> Result<StellarState> {
        Ok(StellarState {
            age: Time::from_myr(age_myr),
            age_fraction: age_fraction(age_myr, self.lifetime),
            radius: self.radius_at(age_myr)?,
            luminosity: self.luminosity_at(age_myr)?,
        })
    }

    fn fractions(&self, age_myr: f64) -> Result<(f64, f64, f64)> {
        let age_myr = require_non_negative("age", age_myr)?;
        let (tau1, tau2) = hook_fractions(age_myr, self.hook_time);
        Ok((age_fraction(age_myr, self.lifetime), tau1, tau2))
    }

    fn finite(&self, quantity: &'static str, value: f64) -> Result<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(StellarError::OutsideFit {
                quantity,
                mass: self.mass,
                metallicity: self.metallicity.z(),
            })
        }
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn metallicity(&self) -> Metallicity {
        self.metallicity
    }

    pub fn zero_age_radius(&self) -> f64 {
        self.zero_age_radius
    }

    pub fn zero_age_luminosity(&self) -> f64 {
        self.zero_age_luminosity
    }

    pub fn terminal_radius(&self) -> f64 {
        self.terminal_radius
    }

    pub fn terminal_luminosity(&self) -> f64 {
        self.terminal_luminosity
    }

    /// Myr
    pub fn base_giant_branch_time(&self) -> f64 {
        self.base_giant_branch_time
    }

    /// Myr
    pub fn hook_time(&self) -> f64 {
        self.hook_time
    }

    /// Main-sequence lifetime, Myr
    pub fn lifetime(&self) -> f64 {
        self.lifetime
    }

    /// (α_R, β_R, γ_R, ΔR)
    pub fn radius_shape(&self) -> (f64, f64, f64, f64) {
        (self.alpha_r, self.beta_r, self.gamma_r, self.delta_r)
    }

    /// (α_L, β_L, ΔL, η)
    pub fn luminosity_shape(&self) -> (f64, f64, f64, f64) {
        (self.alpha_l, self.beta_l, self.delta_l, self.eta)
    }
}

/// Main-sequence radius of a star.
///
/// # Arguments
/// * `age_myr` - Time since the zero-age main sequence in Myr
/// * `mass` - Stellar mass in solar masses
/// * `metallicity` - Metal mass fraction Z
///
/// # Returns
/// Radius in solar radii. Fails with a domain error for non-positive mass or
/// metallicity or a negative age, and with `OutsideFit` where the fits stop
/// being real-valued.
pub fn radius(age_myr: f64, mass: f64, metallicity: f64) -> Result<f64> {
    MainSequenceTrack::new(mass, metallicity)?.radius_at(age_myr)
}

/// Main-sequence luminosity of a star.
///
/// # Arguments
/// * `age_myr` - Time since the zero-age main sequence in Myr
/// * `mass` - Stellar mass in solar masses
/// * `metallicity` - Metal mass fraction Z
///
/// # Returns
/// Luminosity in solar luminosities, with the same failure modes as
/// [`radius`].
pub fn luminosity(age_myr: f64, mass: f64, metallicity: f64) -> Result<f64> {
    MainSequenceTrack::new(mass, metallicity)?.luminosity_at(age_myr)
}

pub fn evaluate(age_myr: f64, mass: f64, metallicity: f64) -> Result<StellarState> {
    MainSequenceTrack::new(mass, metallicity)?.state_at(age_myr)
}
