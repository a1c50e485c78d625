mod generate;

pub use generate::generate_scenarios;

use serde::{Deserialize, Serialize};

/// Application domain a deployment scenario belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    NonprofitDonations,
    SupplyChainProvenance,
    HealthRecordAccess,
    AcademicCredentials,
    InterbankSettlement,
    IotDeviceIntegrity,
}

impl Domain {
    pub const ALL: [Domain; 6] = [
        Domain::NonprofitDonations,
        Domain::SupplyChainProvenance,
        Domain::HealthRecordAccess,
        Domain::AcademicCredentials,
        Domain::InterbankSettlement,
        Domain::IotDeviceIntegrity,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Domain::NonprofitDonations => "nonprofit donations",
            Domain::SupplyChainProvenance => "supply-chain provenance",
            Domain::HealthRecordAccess => "health record access",
            Domain::AcademicCredentials => "academic credentials",
            Domain::InterbankSettlement => "interbank settlement",
            Domain::IotDeviceIntegrity => "IoT device integrity",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GovernanceModel {
    SingleOperator,
    ConsortiumBft,
    PermissionlessPos,
    PermissionedRaft,
}

impl GovernanceModel {
    pub const ALL: [GovernanceModel; 4] = [
        GovernanceModel::SingleOperator,
        GovernanceModel::ConsortiumBft,
        GovernanceModel::PermissionlessPos,
        GovernanceModel::PermissionedRaft,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GovernanceModel::SingleOperator => "single operator",
            GovernanceModel::ConsortiumBft => "consortium BFT",
            GovernanceModel::PermissionlessPos => "permissionless PoS",
            GovernanceModel::PermissionedRaft => "permissioned Raft",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdoptionStage {
    Idea,
    Pilot,
    Production,
}

impl AdoptionStage {
    pub fn label(&self) -> &'static str {
        match self {
            AdoptionStage::Idea => "idea",
            AdoptionStage::Pilot => "pilot",
            AdoptionStage::Production => "production",
        }
    }
}

/// One benchmark input: a hypothetical blockchain deployment scenario.
///
/// Ordinal fields carry their declared ranges in the column name conventions
/// below; the scorer does not re-validate them. Field order matches the CSV
/// column order of the scenario dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRecord {
    pub scenario_id: String,
    pub domain: Domain,
    pub governance_model: GovernanceModel,
    /// Parties sharing the ledger, 3-30.
    pub stakeholders_count: u32,
    /// 1-5, higher means less mutual trust.
    pub trust_asymmetry_level: u8,
    /// 1-5.
    pub data_sensitivity: u8,
    pub dispute_frequency_per_month: u32,
    /// 1-5.
    pub regulatory_pressure: u8,
    /// 0 or 1.
    pub incident_response_present: u8,
    /// 0 or 1.
    pub upgrade_policy_present: u8,
    /// 0 or 1.
    pub dispute_process_present: u8,
    /// 0 unclear, 1 partial, 2 clear.
    pub decision_rights_clarity: u8,
    /// 1-5.
    pub key_management_maturity: u8,
    /// 1-5.
    pub observability_level: u8,
    /// 1-5.
    pub data_governance_maturity: u8,
    /// 1-5.
    pub change_readiness: u8,
    pub cost_baseline: f64,
    pub cost_blockchain_est: f64,
    pub time_baseline: f64,
    pub time_blockchain_est: f64,
    pub adoption_stage: AdoptionStage,
}
