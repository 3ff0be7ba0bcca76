use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneCount {
    pub zone: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotCount {
    pub zone: String,
    pub hour: u8,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResult {
    pub source: String,
    pub zones: usize,
    pub trips: u64,
    pub top_zones: Vec<ZoneCount>,
    pub top_slots: Vec<SlotCount>,
}
