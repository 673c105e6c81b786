use cinelane_engine::{DisplaySurface, ListRegion, Region};
use std::collections::HashMap;

/// One call made against a `RecordingSurface`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceOp {
    SetText(Region, String),
    ClearList(ListRegion),
    PushReason(String),
    PushLaneCard(String, String),
}

/// Display surface that keeps both the current region contents and the
/// log of operations that produced them.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    texts: HashMap<Region, String>,
    reasons: Vec<String>,
    lane: Vec<(String, String)>,
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface with leftover content in every region, for checking that a
    /// render replaces rather than appends.
    pub fn with_stale_content() -> Self {
        let mut surface = Self::new();
        for region in Region::ALL {
            surface.texts.insert(region, "stale".to_string());
        }
        surface.reasons.push("stale reason".to_string());
        surface.lane.push(("stale".to_string(), "card".to_string()));
        surface
    }

    pub fn text(&self, region: Region) -> Option<&str> {
        self.texts.get(&region).map(String::as_str)
    }

    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    pub fn lane(&self) -> &[(String, String)] {
        &self.lane
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }
}

impl DisplaySurface for RecordingSurface {
    fn set_text(&mut self, region: Region, text: &str) {
        self.texts.insert(region, text.to_string());
        self.ops.push(SurfaceOp::SetText(region, text.to_string()));
    }

    fn clear_list(&mut self, list: ListRegion) {
        match list {
            ListRegion::Reasons => self.reasons.clear(),
            ListRegion::Lane => self.lane.clear(),
        }
        self.ops.push(SurfaceOp::ClearList(list));
    }

    fn push_reason(&mut self, text: &str) {
        self.reasons.push(text.to_string());
        self.ops.push(SurfaceOp::PushReason(text.to_string()));
    }

    fn push_lane_card(&mut self, name: &str, subtitle: &str) {
        self.lane.push((name.to_string(), subtitle.to_string()));
        self.ops
            .push(SurfaceOp::PushLaneCard(name.to_string(), subtitle.to_string()));
    }
}
