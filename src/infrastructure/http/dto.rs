//! Data Transfer Objects

use serde::Serialize;

use crate::application::StatsResult;

/// 根路径问候
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// 单值计算结果
#[derive(Debug, Serialize)]
pub struct ResultResponse<T: Serialize> {
    pub result: T,
}

impl<T: Serialize> ResultResponse<T> {
    pub fn new(result: T) -> Self {
        Self { result }
    }
}

/// 列表统计结果
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub count: usize,
    pub total: i128,
    pub average: f64,
    pub min: i64,
    pub max: i64,
}

impl From<StatsResult> for StatsResponse {
    fn from(result: StatsResult) -> Self {
        Self {
            count: result.count,
            total: result.total,
            average: result.average,
            min: result.min,
            max: result.max,
        }
    }
}
