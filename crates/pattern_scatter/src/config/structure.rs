//! Optional post-generation structure settings.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DistributionMode {
    /// Leave positions as generated.
    #[default]
    Scatter,
    Flow,
    Cluster,
    Wave,
    Spiral,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RotationLock {
    #[default]
    Free,
    #[cfg_attr(feature = "serde", serde(rename = "45"))]
    Deg45,
    #[cfg_attr(feature = "serde", serde(rename = "90"))]
    Deg90,
}

impl RotationLock {
    /// Snap step in degrees, `None` when unlocked.
    pub fn step_degrees(self) -> Option<f64> {
        match self {
            RotationLock::Free => None,
            RotationLock::Deg45 => Some(45.0),
            RotationLock::Deg90 => Some(90.0),
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorDistribution {
    /// Keep generator colors.
    #[default]
    Keep,
    GradientH,
    GradientV,
    GradientRadial,
    Zones,
    Alternating,
    Random,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
#[derive(Clone, Debug, PartialEq)]
pub struct StructureConfig {
    pub distribution_mode: DistributionMode,
    /// 0 leaves positions alone, 100 snaps fully to the 10×10 grid.
    pub regularity: f64,
    /// 100 keeps generated sizes, 0 makes every shape the reference size.
    pub size_variation: f64,
    pub rotation_lock: RotationLock,
    pub color_distribution: ColorDistribution,
    /// Extra clearance between shapes in percent; 0 disables relaxation.
    pub min_spacing: f64,
}

impl Default for StructureConfig {
    fn default() -> Self {
        Self {
            distribution_mode: DistributionMode::Scatter,
            regularity: 0.0,
            size_variation: 100.0,
            rotation_lock: RotationLock::Free,
            color_distribution: ColorDistribution::Keep,
            min_spacing: 0.0,
        }
    }
}

impl StructureConfig {
    pub fn with_distribution(mut self, mode: DistributionMode) -> Self {
        self.distribution_mode = mode;
        self
    }

    pub fn with_regularity(mut self, regularity: f64) -> Self {
        self.regularity = regularity;
        self
    }

    pub fn with_size_variation(mut self, size_variation: f64) -> Self {
        self.size_variation = size_variation;
        self
    }

    pub fn with_rotation_lock(mut self, lock: RotationLock) -> Self {
        self.rotation_lock = lock;
        self
    }

    pub fn with_color_distribution(mut self, mode: ColorDistribution) -> Self {
        self.color_distribution = mode;
        self
    }

    pub fn with_min_spacing(mut self, min_spacing: f64) -> Self {
        self.min_spacing = min_spacing;
        self
    }

    /// Regularity as a blend factor in [0, 1].
    pub fn regularity_factor(&self) -> f64 {
        percent_factor(self.regularity, 0.0)
    }

    /// Size variation as a blend factor in [0, 1].
    pub fn size_variation_factor(&self) -> f64 {
        percent_factor(self.size_variation, 1.0)
    }

    /// Min spacing as a clearance factor in [0, 1].
    pub fn min_spacing_factor(&self) -> f64 {
        percent_factor(self.min_spacing, 0.0)
    }
}

fn percent_factor(value: f64, non_finite: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 100.0) / 100.0
    } else {
        non_finite
    }
}
