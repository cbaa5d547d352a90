//! 抵达时间估算
//!
//! 直线坐标差近似：经纬度差按每度 111.0 公里折算，以 40 km/h 平均速度
//! 换算为分钟并四舍五入，下限 3 分钟。任一侧坐标缺失时返回固定的
//! 15 分钟默认值。不考虑路网、曲率修正和行进方向。

/// 任一侧坐标缺失时的默认 ETA
pub const DEFAULT_ETA_MINUTES: i32 = 15;
/// ETA 下限
pub const MIN_ETA_MINUTES: i32 = 3;

const KM_PER_DEGREE: f64 = 111.0;
const AVG_SPEED_KMH: f64 = 40.0;

/// 估算响应人员到事发地点的分钟数
pub fn estimate(responder: Option<(f64, f64)>, incident: Option<(f64, f64)>) -> i32 {
    let (Some((r_lat, r_lng)), Some((i_lat, i_lng))) = (responder, incident) else {
        return DEFAULT_ETA_MINUTES;
    };

    let d_lat = r_lat - i_lat;
    let d_lng = r_lng - i_lng;
    let distance_km = (d_lat * d_lat + d_lng * d_lng).sqrt() * KM_PER_DEGREE;
    let minutes = distance_km / AVG_SPEED_KMH * 60.0;

    (minutes.round() as i32).max(MIN_ETA_MINUTES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nairobi_scenario_clamps_to_minimum() {
        // 约 1.25 公里，折算 1.88 分钟，四舍五入为 2，取下限 3
        let eta = estimate(Some((-1.2921, 36.8219)), Some((-1.30, 36.83)));
        assert_eq!(eta, 3);
    }

    #[test]
    fn test_longer_distance_rounds() {
        // Nairobi -> Mombasa 量级的跨度应明显超过下限
        let eta = estimate(Some((-1.2921, 36.8219)), Some((-4.0435, 39.6682)));
        let d_lat: f64 = -1.2921 + 4.0435;
        let d_lng: f64 = 36.8219 - 39.6682;
        let expected = ((d_lat * d_lat + d_lng * d_lng).sqrt() * 111.0 / 40.0 * 60.0).round() as i32;
        assert_eq!(eta, expected);
        assert!(eta > MIN_ETA_MINUTES);
    }

    #[test]
    fn test_missing_responder_location_defaults() {
        assert_eq!(estimate(None, Some((-1.30, 36.83))), DEFAULT_ETA_MINUTES);
    }

    #[test]
    fn test_missing_incident_location_defaults() {
        assert_eq!(estimate(Some((-1.2921, 36.8219)), None), DEFAULT_ETA_MINUTES);
    }

    #[test]
    fn test_both_missing_defaults() {
        assert_eq!(estimate(None, None), DEFAULT_ETA_MINUTES);
    }

    #[test]
    fn test_zero_distance_clamps_to_minimum() {
        assert_eq!(estimate(Some((-1.30, 36.83)), Some((-1.30, 36.83))), MIN_ETA_MINUTES);
    }
}
