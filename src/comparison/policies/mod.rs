pub mod constants;
pub mod industry_profile;
pub mod region;

pub use constants::{
    CalculationConstants, MttrBaseHours, OrgSizeMultipliers, RecommendationWeights,
};
pub use industry_profile::{IndustryProfile, IndustryProfiles};
pub use region::{RegionFactors, RegionalCostPolicy};

/// Every table the calculators read, injected as one bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationTables {
    pub constants: CalculationConstants,
    pub industries: IndustryProfiles,
}

impl CalculationTables {
    pub fn new(constants: CalculationConstants, industries: IndustryProfiles) -> Self {
        Self {
            constants,
            industries,
        }
    }

    pub fn standard() -> Self {
        Self::new(CalculationConstants::default(), IndustryProfiles::standard())
    }

    pub fn with_constants(self, constants: CalculationConstants) -> Self {
        Self { constants, ..self }
    }
}
