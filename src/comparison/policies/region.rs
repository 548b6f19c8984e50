use crate::comparison::domain::Region;

/// Cost multipliers relative to North America
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionFactors {
    pub labor: f64,
    pub hardware: f64,
}

/// RegionalCostPolicy maps a region to its labor and hardware multipliers.
pub struct RegionalCostPolicy;

impl RegionalCostPolicy {
    pub fn factors(region: Region) -> RegionFactors {
        let (labor, hardware) = match region {
            Region::NorthAmerica => (1.0, 1.0),
            Region::Europe => (0.76, 1.1),
            Region::AsiaPacific => (0.52, 1.05),
            Region::LatinAmerica => (0.44, 1.15),
            Region::MiddleEast => (0.64, 1.0),
        };
        RegionFactors { labor, hardware }
    }
}
