use crate::models::agent::AgentModel;
use crate::repository::{
    CreateBatch, FindByCode, FindById, FindByParent, ListAll, RecordSale, ReserveNextSequence,
    TransitionStatus, UpdateBatch,
};

/// Every operation the hierarchy services need from an agent store
pub trait AgentRepository:
    FindById<AgentModel>
    + FindByCode
    + FindByParent
    + ListAll<AgentModel>
    + CreateBatch<AgentModel>
    + UpdateBatch<AgentModel>
    + ReserveNextSequence
    + RecordSale
    + TransitionStatus
{
}

impl<R> AgentRepository for R where
    R: FindById<AgentModel>
        + FindByCode
        + FindByParent
        + ListAll<AgentModel>
        + CreateBatch<AgentModel>
        + UpdateBatch<AgentModel>
        + ReserveNextSequence
        + RecordSale
        + TransitionStatus
{
}
