//! 演示数据种子
//!
//! 首次启动时写入一批肯尼亚城市的演示响应人员，目录非空时跳过。

use std::sync::Arc;

use tracing::info;

use respond_domain::entities::{Responder, ResponderRole};
use respond_domain::errors::DispatchResult;
use respond_domain::repositories::ResponderRepository;

pub struct DataSeeder {
    responders: Arc<dyn ResponderRepository>,
}

impl DataSeeder {
    pub fn new(responders: Arc<dyn ResponderRepository>) -> Self {
        Self { responders }
    }

    /// 目录为空时写入演示人员，返回写入条数
    pub async fn seed_responders(&self) -> DispatchResult<usize> {
        if !self.responders.list().await?.is_empty() {
            info!("响应人员目录非空，跳过演示数据");
            return Ok(0);
        }

        let demo = demo_responders();
        let count = demo.len();
        for responder in &demo {
            self.responders.create(responder).await?;
        }

        info!("已写入 {} 名演示响应人员", count);
        Ok(count)
    }
}

fn demo_responders() -> Vec<Responder> {
    vec![
        Responder {
            id: 0,
            name: "James Mwangi".to_string(),
            role: ResponderRole::Medic,
            current_lat: Some(-1.2921),
            current_lng: Some(36.8219),
            availability: true,
        },
        Responder {
            id: 0,
            name: "Aisha Odhiambo".to_string(),
            role: ResponderRole::Police,
            current_lat: Some(-4.0435),
            current_lng: Some(39.6682),
            availability: true,
        },
        Responder {
            id: 0,
            name: "Peter Ochieng".to_string(),
            role: ResponderRole::Fire,
            current_lat: Some(-0.0917),
            current_lng: Some(34.7679),
            availability: true,
        },
        Responder {
            id: 0,
            name: "Grace Wanjiku".to_string(),
            role: ResponderRole::Medic,
            current_lat: Some(0.5143),
            current_lng: Some(35.2698),
            availability: false,
        },
    ]
}
