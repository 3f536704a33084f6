//! Conversions between the three coordinate systems used in electrostatics
//! problems. Angles are in radians throughout.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cartesian {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// (ρ, φ, z): radial distance from the z axis, azimuth, height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylindrical {
    pub rho: f64,
    pub phi: f64,
    pub z: f64,
}

/// (r, θ, φ): distance from origin, polar angle from +z, azimuth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    pub r: f64,
    pub theta: f64,
    pub phi: f64,
}

impl Cartesian {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn to_cylindrical(&self) -> Cylindrical {
        Cylindrical {
            rho: self.x.hypot(self.y),
            phi: self.y.atan2(self.x),
            z: self.z,
        }
    }

    pub fn to_spherical(&self) -> Spherical {
        let r = (self.x * self.x + self.y * self.y + self.z * self.z).sqrt();
        // Polar angle is undefined at the origin; report 0 like the azimuth does
        let theta = if r == 0.0 { 0.0 } else { (self.z / r).clamp(-1.0, 1.0).acos() };
        Spherical {
            r,
            theta,
            phi: self.y.atan2(self.x),
        }
    }
}

impl Cylindrical {
    pub fn to_cartesian(&self) -> Cartesian {
        Cartesian {
            x: self.rho * self.phi.cos(),
            y: self.rho * self.phi.sin(),
            z: self.z,
        }
    }
}

impl Spherical {
    pub fn to_cartesian(&self) -> Cartesian {
        let (st, ct) = self.theta.sin_cos();
        let (sp, cp) = self.phi.sin_cos();
        Cartesian {
            x: self.r * st * cp,
            y: self.r * st * sp,
            z: self.r * ct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_axis_points() {
        let c = Cartesian::new(0.0, 2.0, 3.0).to_cylindrical();
        assert!(close(c.rho, 2.0));
        assert!(close(c.phi, FRAC_PI_2));
        assert!(close(c.z, 3.0));

        let s = Cartesian::new(0.0, 0.0, -4.0).to_spherical();
        assert!(close(s.r, 4.0));
        assert!(close(s.theta, PI));
    }

    #[test]
    fn test_origin_has_zero_angles() {
        let s = Cartesian::new(0.0, 0.0, 0.0).to_spherical();
        assert_eq!((s.r, s.theta, s.phi), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_spherical_diagonal() {
        let s = Cartesian::new(1.0, 1.0, 0.0).to_spherical();
        assert!(close(s.r, 2f64.sqrt()));
        assert!(close(s.theta, FRAC_PI_2));
        assert!(close(s.phi, FRAC_PI_4));

        let back = s.to_cartesian();
        assert!(close(back.x, 1.0) && close(back.y, 1.0) && back.z.abs() < 1e-12);
    }

    #[test]
    fn test_cylindrical_back_to_cartesian() {
        let p = Cartesian::new(-3.0, -4.0, 1.5);
        let back = p.to_cylindrical().to_cartesian();
        assert!(close(back.x, p.x) && close(back.y, p.y) && close(back.z, p.z));
    }
}
