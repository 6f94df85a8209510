//! Real grids laid out along radial and angular steps, converted to Cartesian
//! points at construction.
//!
//! Radius `i * dr` for `i` in `0..r_count` and angle `j * dtheta` for `j` in
//! `0..theta_count` (likewise for `phi` and `z`). Every angular step at zero
//! radius lands on the origin, so the origin is recorded once (once per `z`
//! level for the cylindrical grid).

use tessera_common::{Result, error::Error};

use super::{RealGridOptions, delegate_to_points};
use crate::{general::SamplingGeneral, point::RealIndex};

fn verify_axis(name: &str, delta: f64, count: u64) -> Result<()> {
    if !(delta.is_finite() && delta > 0.0) {
        return Err(Error::invalid_range(
            name,
            format!("step {delta} must be finite and positive"),
        ));
    }
    if count == 0 {
        return Err(Error::invalid_range(name, "count must be nonzero"));
    }
    Ok(())
}

fn point_budget(counts: &[u64]) -> Result<usize> {
    counts
        .iter()
        .try_fold(1u64, |acc, &c| acc.checked_mul(c))
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| Error::invalid_range("counts", "point count overflows"))
}

/// Points `(r cos theta, r sin theta)`.
#[derive(Debug, Clone)]
pub struct SamplingPolarRealGrid {
    points: SamplingGeneral<RealIndex>,
}

impl SamplingPolarRealGrid {
    pub fn new(dr: f64, r_count: u64, dtheta: f64, theta_count: u64) -> Result<Self> {
        Self::with_options(dr, r_count, dtheta, theta_count, &RealGridOptions::default())
    }

    pub fn with_options(
        dr: f64,
        r_count: u64,
        dtheta: f64,
        theta_count: u64,
        options: &RealGridOptions,
    ) -> Result<Self> {
        options.validate()?;
        verify_axis("dr", dr, r_count)?;
        verify_axis("dtheta", dtheta, theta_count)?;
        point_budget(&[r_count, theta_count])?;

        let mut points = SamplingGeneral::with_tolerance(2, options.get_tolerance())?;
        points.add(&RealIndex::new(2))?;
        for i in 1..r_count {
            let r = i as f64 * dr;
            for j in 0..theta_count {
                let theta = j as f64 * dtheta;
                points.add(&RealIndex::from([r * theta.cos(), r * theta.sin()]))?;
            }
        }
        log::debug!("enumerated polar grid: {} points", points.len());
        Ok(SamplingPolarRealGrid { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Points `(r cos theta, r sin theta, z)`.
#[derive(Debug, Clone)]
pub struct SamplingCylindricalRealGrid {
    points: SamplingGeneral<RealIndex>,
}

impl SamplingCylindricalRealGrid {
    pub fn new(
        dr: f64,
        r_count: u64,
        dtheta: f64,
        theta_count: u64,
        dz: f64,
        z_count: u64,
    ) -> Result<Self> {
        Self::with_options(
            dr,
            r_count,
            dtheta,
            theta_count,
            dz,
            z_count,
            &RealGridOptions::default(),
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn with_options(
        dr: f64,
        r_count: u64,
        dtheta: f64,
        theta_count: u64,
        dz: f64,
        z_count: u64,
        options: &RealGridOptions,
    ) -> Result<Self> {
        options.validate()?;
        verify_axis("dr", dr, r_count)?;
        verify_axis("dtheta", dtheta, theta_count)?;
        verify_axis("dz", dz, z_count)?;
        point_budget(&[r_count, theta_count, z_count])?;

        let mut points = SamplingGeneral::with_tolerance(3, options.get_tolerance())?;
        for k in 0..z_count {
            let z = k as f64 * dz;
            points.add(&RealIndex::from([0.0, 0.0, z]))?;
            for i in 1..r_count {
                let r = i as f64 * dr;
                for j in 0..theta_count {
                    let theta = j as f64 * dtheta;
                    points.add(&RealIndex::from([r * theta.cos(), r * theta.sin(), z]))?;
                }
            }
        }
        log::debug!("enumerated cylindrical grid: {} points", points.len());
        Ok(SamplingCylindricalRealGrid { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Points `(r sin phi cos theta, r sin phi sin theta, r cos phi)` with `phi`
/// measured from the `+z` axis.
#[derive(Debug, Clone)]
pub struct SamplingSphericalRealGrid {
    points: SamplingGeneral<RealIndex>,
}

impl SamplingSphericalRealGrid {
    pub fn new(
        dr: f64,
        r_count: u64,
        dtheta: f64,
        theta_count: u64,
        dphi: f64,
        phi_count: u64,
    ) -> Result<Self> {
        Self::with_options(
            dr,
            r_count,
            dtheta,
            theta_count,
            dphi,
            phi_count,
            &RealGridOptions::default(),
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn with_options(
        dr: f64,
        r_count: u64,
        dtheta: f64,
        theta_count: u64,
        dphi: f64,
        phi_count: u64,
        options: &RealGridOptions,
    ) -> Result<Self> {
        options.validate()?;
        verify_axis("dr", dr, r_count)?;
        verify_axis("dtheta", dtheta, theta_count)?;
        verify_axis("dphi", dphi, phi_count)?;
        point_budget(&[r_count, theta_count, phi_count])?;

        let mut points = SamplingGeneral::with_tolerance(3, options.get_tolerance())?;
        points.add(&RealIndex::new(3))?;
        for i in 1..r_count {
            let r = i as f64 * dr;
            for k in 0..phi_count {
                let phi = k as f64 * dphi;
                let (sin_phi, cos_phi) = phi.sin_cos();
                for j in 0..theta_count {
                    let theta = j as f64 * dtheta;
                    let (sin_theta, cos_theta) = theta.sin_cos();
                    points.add(&RealIndex::from([
                        r * sin_phi * cos_theta,
                        r * sin_phi * sin_theta,
                        r * cos_phi,
                    ]))?;
                }
            }
        }
        log::debug!("enumerated spherical grid: {} points", points.len());
        Ok(SamplingSphericalRealGrid { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

delegate_to_points!(
    SamplingPolarRealGrid,
    SamplingCylindricalRealGrid,
    SamplingSphericalRealGrid
);
