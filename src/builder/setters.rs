use crate::builder::config::FeatureConsumption;
use crate::builder::Id3Builder;

impl Id3Builder {
    // Set methods for parameters

    /// Set the minimum leaf size on the builder.
    /// * `min_leaf_size` - Slices with this many records or fewer become leaves.
    pub fn set_min_leaf_size(mut self, min_leaf_size: usize) -> Self {
        self.cfg.min_leaf_size = min_leaf_size;
        self
    }

    /// Set how split features are consumed.
    /// * `feature_consumption` - Per-branch copies or one global set.
    pub fn set_feature_consumption(mut self, feature_consumption: FeatureConsumption) -> Self {
        self.cfg.feature_consumption = feature_consumption;
        self
    }
}
