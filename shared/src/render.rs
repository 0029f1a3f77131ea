use crate::{EffectError, Particle, ParticleSet, PathSegment, RenderSurface, Transform};

/// Heart outline centered on the origin, roughly 26 by 20 pixels. Two mirrored cubic curves
/// run from the notch between the lobes down to the tip.
pub const HEART_PATH: [PathSegment; 4] = [
    PathSegment::MoveTo(0.0, -3.0),
    PathSegment::BezierCurveTo {
        control_1: (-5.0, -10.0),
        control_2: (-13.0, -2.0),
        end: (0.0, 10.0),
    },
    PathSegment::BezierCurveTo {
        control_1: (13.0, -2.0),
        control_2: (5.0, -10.0),
        end: (0.0, -3.0),
    },
    PathSegment::Close,
];

/// Draws a single particle as a heart at its position, rotation and opacity.
pub fn draw<S: RenderSurface>(surface: &mut S, particle: &Particle) -> Result<(), EffectError> {
    let transform = Transform {
        translation: particle.position,
        rotation: particle.rotation,
    };

    surface.with_transform(transform, |surface| {
        surface.set_alpha(particle.alpha.clamp(0.0, 1.0))?;
        surface.fill_path(&HEART_PATH, particle.color())
    })
}

/// Repaints the whole surface with every particle of `particles`, in order.
pub fn render_frame<S: RenderSurface>(
    surface: &mut S,
    particles: &ParticleSet,
) -> Result<(), EffectError> {
    surface.clear()?;

    for particle in particles {
        draw(surface, particle)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        mock::{RecordingSurface, SurfaceOp},
        Color, Viewport,
    };

    #[test]
    fn heart_is_symmetric() {
        let PathSegment::BezierCurveTo {
            control_1: l1,
            control_2: l2,
            end: tip,
        } = HEART_PATH[1]
        else {
            panic!("left curve expected");
        };
        let PathSegment::BezierCurveTo {
            control_1: r1,
            control_2: r2,
            end: notch,
        } = HEART_PATH[2]
        else {
            panic!("right curve expected");
        };

        assert_eq!(HEART_PATH[0], PathSegment::MoveTo(notch.0, notch.1));
        assert_eq!(tip.0, 0.0);
        assert_eq!((l1.0, l1.1), (-r2.0, r2.1));
        assert_eq!((l2.0, l2.1), (-r1.0, r1.1));
    }

    #[test]
    fn frame_clears_then_draws_in_order() {
        let mut surface = RecordingSurface::new(Viewport::new(200, 100));
        let mut particles = ParticleSet::new();

        let red = Color::hsl(0.0, 100.0, 70.0);
        let blue = Color::hsl(240.0, 100.0, 70.0);

        let mut first = Particle::new((10.0, 20.0), (0.0, 0.0), red);
        first.rotation = 0.5;
        first.alpha = 0.25;
        particles.push(first);

        let mut second = Particle::new((30.0, 40.0), (0.0, 0.0), blue);
        second.alpha = 1.0;
        particles.push(second);

        render_frame(&mut surface, &particles).unwrap();

        assert_eq!(
            surface.ops,
            vec![
                SurfaceOp::Clear,
                SurfaceOp::Save(Transform {
                    translation: (10.0, 20.0),
                    rotation: 0.5,
                }),
                SurfaceOp::Alpha(0.25),
                SurfaceOp::Fill(red),
                SurfaceOp::Restore,
                SurfaceOp::Save(Transform {
                    translation: (30.0, 40.0),
                    rotation: 0.0,
                }),
                SurfaceOp::Alpha(1.0),
                SurfaceOp::Fill(blue),
                SurfaceOp::Restore,
            ]
        );
    }

    #[test]
    fn expired_alpha_is_clamped() {
        let mut surface = RecordingSurface::new(Viewport::new(200, 100));
        let mut particle = Particle::new((0.0, 0.0), (0.0, 0.0), Color::hsl(0.0, 100.0, 70.0));
        particle.alpha = -0.01;

        draw(&mut surface, &particle).unwrap();

        assert!(surface.ops.contains(&SurfaceOp::Alpha(0.0)));
    }

    #[test]
    fn empty_frame_only_clears() {
        let mut surface = RecordingSurface::new(Viewport::new(200, 100));

        render_frame(&mut surface, &ParticleSet::new()).unwrap();

        assert_eq!(surface.ops, vec![SurfaceOp::Clear]);
    }
}
