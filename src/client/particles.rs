//! tsParticles options for the decorative background

use serde::Serialize;

use crate::config::ParticlesConfig;

#[derive(Debug, Clone, Serialize)]
pub struct ValueOf<T> {
    pub value: T,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShapeOptions {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MoveOptions {
    pub enable: bool,
    pub speed: f64,
    pub direction: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticleShape {
    pub number: ValueOf<u32>,
    pub color: ValueOf<String>,
    pub shape: ShapeOptions,
    pub opacity: ValueOf<f64>,
    pub size: ValueOf<f64>,
    #[serde(rename = "move")]
    pub movement: MoveOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct FullScreen {
    pub enable: bool,
}

/// The options object handed to `tsParticles.load`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticleOptions {
    pub full_screen: FullScreen,
    pub particles: ParticleShape,
}

impl ParticleOptions {
    pub fn from_config(config: &ParticlesConfig) -> Self {
        Self {
            // The layer is positioned behind the page, not over the viewport
            full_screen: FullScreen { enable: false },
            particles: ParticleShape {
                number: ValueOf {
                    value: config.count,
                },
                color: ValueOf {
                    value: config.color.clone(),
                },
                shape: ShapeOptions {
                    kind: config.shape.clone(),
                },
                opacity: ValueOf {
                    value: config.opacity.clamp(0.0, 1.0),
                },
                size: ValueOf { value: config.size },
                movement: MoveOptions {
                    enable: config.speed > 0.0,
                    speed: config.speed,
                    direction: config.direction.clone(),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_shape() {
        let options = ParticleOptions::from_config(&ParticlesConfig::default());
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["fullScreen"]["enable"], false);
        assert_eq!(json["particles"]["number"]["value"], 100);
        assert_eq!(json["particles"]["color"]["value"], "#00ccff");
        assert_eq!(json["particles"]["shape"]["type"], "circle");
        assert_eq!(json["particles"]["opacity"]["value"], 0.6);
        assert_eq!(json["particles"]["size"]["value"], 2.0);
        assert_eq!(json["particles"]["move"]["enable"], true);
        assert_eq!(json["particles"]["move"]["speed"], 0.8);
        assert_eq!(json["particles"]["move"]["direction"], "none");
    }

    #[test]
    fn test_still_particles() {
        let config = ParticlesConfig {
            speed: 0.0,
            opacity: 3.0,
            ..ParticlesConfig::default()
        };
        let options = ParticleOptions::from_config(&config);
        assert!(!options.particles.movement.enable);
        assert_eq!(options.particles.opacity.value, 1.0);
    }
}
