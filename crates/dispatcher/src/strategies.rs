use std::sync::Arc;

use tracing::debug;

use respond_domain::entities::Responder;

/// 选派策略抽象：从候选集中挑出一名响应人员
///
/// 候选集由调用方保证为当前可用人员；策略本身不做占用，占用由引擎
/// 在选中后通过目录的原子转移完成。
pub trait DispatchStrategy: Send + Sync {
    fn pick<'a>(
        &self,
        candidates: &'a [Responder],
        incident_location: Option<(f64, f64)>,
    ) -> Option<&'a Responder>;

    fn name(&self) -> &str;
}

/// 最简策略：取可用集中的第一名，不考虑距离和负载
pub struct FirstAvailableStrategy;

impl FirstAvailableStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FirstAvailableStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchStrategy for FirstAvailableStrategy {
    fn pick<'a>(
        &self,
        candidates: &'a [Responder],
        _incident_location: Option<(f64, f64)>,
    ) -> Option<&'a Responder> {
        let selected = candidates.first();
        if let Some(responder) = selected {
            debug!("首位可用策略选中响应人员: {}", responder.id);
        } else {
            debug!("没有可用的响应人员");
        }
        selected
    }

    fn name(&self) -> &str {
        "FirstAvailable"
    }
}

/// 按直线距离排序的地理策略；事发地点或候选人坐标缺失时退化为首位可用
pub struct NearestStrategy;

impl NearestStrategy {
    pub fn new() -> Self {
        Self
    }

    fn squared_degree_distance(responder: &Responder, incident: (f64, f64)) -> Option<f64> {
        let (r_lat, r_lng) = responder.location()?;
        let d_lat = r_lat - incident.0;
        let d_lng = r_lng - incident.1;
        Some(d_lat * d_lat + d_lng * d_lng)
    }
}

impl Default for NearestStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchStrategy for NearestStrategy {
    fn pick<'a>(
        &self,
        candidates: &'a [Responder],
        incident_location: Option<(f64, f64)>,
    ) -> Option<&'a Responder> {
        if candidates.is_empty() {
            debug!("没有可用的响应人员");
            return None;
        }

        let Some(incident) = incident_location else {
            debug!("事发地点无坐标，最近距离策略退化为首位可用");
            return candidates.first();
        };

        let located: Vec<(&Responder, f64)> = candidates
            .iter()
            .filter_map(|r| Self::squared_degree_distance(r, incident).map(|d| (r, d)))
            .collect();

        if located.is_empty() {
            debug!("所有候选人均无坐标，最近距离策略退化为首位可用");
            return candidates.first();
        }

        let selected = located
            .iter()
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(responder, _)| *responder);

        if let Some(responder) = selected {
            debug!("最近距离策略选中响应人员: {}", responder.id);
        }
        selected
    }

    fn name(&self) -> &str {
        "Nearest"
    }
}

/// 按配置名称构建策略
pub fn strategy_by_name(name: &str) -> Option<Arc<dyn DispatchStrategy>> {
    match name {
        "first_available" => Some(Arc::new(FirstAvailableStrategy::new())),
        "nearest" => Some(Arc::new(NearestStrategy::new())),
        _ => None,
    }
}
