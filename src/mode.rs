use crate::graph::GraphError;

/// A named way of travelling at a constant speed (distance units per time
/// unit). Two modes are the same mode when their names match.
#[derive(Debug, Clone, PartialEq)]
pub struct TravelMode {
    name: String,
    speed: f64,
}

impl TravelMode {
    pub fn new(name: impl Into<String>, speed: f64) -> Result<Self, GraphError> {
        let name = name.into();
        if speed <= 0.0 {
            return Err(GraphError::NonPositiveSpeed { name, speed });
        }
        Ok(Self { name, speed })
    }

    fn known(name: &str, speed: f64) -> Self {
        Self {
            name: name.to_string(),
            speed,
        }
    }

    pub fn foot() -> Self {
        Self::known("Foot", 2.0)
    }

    pub fn bike() -> Self {
        Self::known("Bike", 30.0)
    }

    pub fn car() -> Self {
        Self::known("Car", 50.0)
    }

    pub fn train() -> Self {
        Self::known("Train", 80.0)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Always strictly positive.
    pub fn speed(&self) -> f64 {
        self.speed
    }
}

pub fn standard_modes() -> Vec<TravelMode> {
    vec![
        TravelMode::foot(),
        TravelMode::bike(),
        TravelMode::car(),
        TravelMode::train(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_speed() {
        assert!(TravelMode::new("Hovercraft", 0.0).is_err());
        assert!(TravelMode::new("Hovercraft", -3.5).is_err());
        assert!(TravelMode::new("Hovercraft", 12.0).is_ok());
    }

    #[test]
    fn standard_modes_match_the_demo_scenario() {
        let modes = standard_modes();
        let names: Vec<&str> = modes.iter().map(|m| m.name()).collect();
        assert_eq!(names, ["Foot", "Bike", "Car", "Train"]);
        assert_eq!(TravelMode::foot().speed(), 2.0);
        assert_eq!(TravelMode::train().speed(), 80.0);
    }
}
