use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    error::error::{
        UserNotFoundSnafu, VesselNameTakenSnafu, VesselNotFoundSnafu, VesselRecordNotFoundSnafu,
    },
    *,
};

/// Storage kept entirely in memory, intended for testing purposes.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    next_vessel_id: i64,
    next_record_id: i64,
    vessels: Vec<Vessel>,
    records: Vec<VesselRecord>,
    users: HashMap<UserId, User>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Inner {
    fn name_taken(&self, name: &VesselName, except: Option<VesselId>) -> bool {
        self.vessels
            .iter()
            .any(|v| Some(v.id) != except && name.is_same_as(&v.name))
    }
}

#[async_trait]
impl WebApiOutboundPort for MemoryStorage {
    async fn vessels(&self) -> Result<Vec<Vessel>> {
        let mut vessels = self.inner.read().await.vessels.clone();
        sort_vessels(&mut vessels);
        Ok(vessels)
    }

    async fn vessel(&self, id: VesselId) -> Result<Option<Vessel>> {
        let inner = self.inner.read().await;
        Ok(inner.vessels.iter().find(|v| v.id == id).cloned())
    }

    async fn vessel_records(&self, query: VesselRecordsQuery) -> Result<Vec<VesselRecord>> {
        let mut records: Vec<_> = self
            .inner
            .read()
            .await
            .records
            .iter()
            .filter(|r| query.matches(r))
            .cloned()
            .collect();
        sort_records(&mut records);
        Ok(records)
    }

    async fn vessel_record(&self, id: VesselRecordId) -> Result<Option<VesselRecord>> {
        let inner = self.inner.read().await;
        Ok(inner.records.iter().find(|r| r.id == id).cloned())
    }

    async fn user(&self, id: &UserId) -> Result<Option<User>> {
        Ok(self.inner.read().await.users.get(id).cloned())
    }

    async fn users(&self) -> Result<Vec<User>> {
        let mut users: Vec<_> = self.inner.read().await.users.values().cloned().collect();
        users.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(users)
    }
}

#[async_trait]
impl WebApiInboundPort for MemoryStorage {
    async fn add_vessel(&self, vessel: NewVessel) -> Result<Vessel> {
        let mut inner = self.inner.write().await;

        if inner.name_taken(&vessel.name, None) {
            return VesselNameTakenSnafu {
                name: vessel.name.into_inner(),
            }
            .fail();
        }

        inner.next_vessel_id += 1;
        let vessel = Vessel {
            id: VesselId::new(inner.next_vessel_id),
            name: vessel.name.into_inner(),
            created_at: Utc::now(),
            created_by: vessel.created_by,
        };
        inner.vessels.push(vessel.clone());

        Ok(vessel)
    }

    async fn update_vessel(&self, update: UpdateVessel) -> Result<Vessel> {
        let mut inner = self.inner.write().await;

        if !inner.vessels.iter().any(|v| v.id == update.id) {
            return VesselNotFoundSnafu { id: update.id }.fail();
        }
        if inner.name_taken(&update.name, Some(update.id)) {
            return VesselNameTakenSnafu {
                name: update.name.into_inner(),
            }
            .fail();
        }

        let vessel = inner
            .vessels
            .iter_mut()
            .find(|v| v.id == update.id)
            .ok_or_else(|| VesselNotFoundSnafu { id: update.id }.build())?;
        vessel.name = update.name.into_inner();

        Ok(vessel.clone())
    }

    async fn delete_vessel(&self, id: VesselId) -> Result<()> {
        let mut inner = self.inner.write().await;
        let len = inner.vessels.len();
        inner.vessels.retain(|v| v.id != id);

        if inner.vessels.len() == len {
            return VesselNotFoundSnafu { id }.fail();
        }
        Ok(())
    }

    async fn add_vessel_record(&self, record: NewVesselRecord) -> Result<VesselRecord> {
        let mut inner = self.inner.write().await;
        inner.next_record_id += 1;

        let record = VesselRecord {
            id: VesselRecordId::new(inner.next_record_id),
            vessel_name: record.vessel_name.into_inner(),
            operation_type: record.operation_type,
            date: record.date,
            time: record.time,
            passengers: record.passengers,
            created_at: Utc::now(),
            created_by: record.created_by,
        };
        inner.records.push(record.clone());

        Ok(record)
    }

    async fn update_vessel_record(&self, update: UpdateVesselRecord) -> Result<VesselRecord> {
        let mut inner = self.inner.write().await;

        let record = inner
            .records
            .iter_mut()
            .find(|r| r.id == update.id)
            .ok_or_else(|| VesselRecordNotFoundSnafu { id: update.id }.build())?;

        record.vessel_name = update.vessel_name.into_inner();
        record.operation_type = update.operation_type;
        record.date = update.date;
        record.time = update.time;
        record.passengers = update.passengers;

        Ok(record.clone())
    }

    async fn delete_vessel_record(&self, id: VesselRecordId) -> Result<()> {
        let mut inner = self.inner.write().await;
        let len = inner.records.len();
        inner.records.retain(|r| r.id != id);

        if inner.records.len() == len {
            return VesselRecordNotFoundSnafu { id }.fail();
        }
        Ok(())
    }

    async fn login_user(&self, user: NewUser) -> Result<User> {
        let mut inner = self.inner.write().await;

        let stored = inner
            .users
            .entry(user.id.clone())
            .and_modify(|u| {
                u.email.clone_from(&user.email);
                u.display_name.clone_from(&user.display_name);
            })
            .or_insert_with(|| user.into());

        Ok(stored.clone())
    }

    async fn update_user_profile(&self, id: &UserId, profile: Profile) -> Result<User> {
        let mut inner = self.inner.write().await;

        let user = inner
            .users
            .get_mut(id)
            .ok_or_else(|| UserNotFoundSnafu { id: id.clone() }.build())?;
        user.profile = profile;

        Ok(user.clone())
    }
}
