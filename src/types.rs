multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Escrow Status — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum EscrowStatus {
    /// Created, awaiting guarantee (if required) and activation.
    Inactive,
    /// Running. Installments accepted, approvals and disputes possible.
    Active,
    /// A party raised a dispute. Withdrawals and auto-completion frozen
    /// until arbitration resolves it.
    Disputed,
    /// Terminal. Only the guarantee ledger may still be zeroed on return.
    Complete,
}

// ============================================================
// Interest model
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum InterestModel {
    /// ceil(base * rate_bps * days / 10_000), charged once.
    Simple,
    /// Day-by-day accrual, each day adding ceil(current * rate_bps / 10_000).
    Compound,
}

// ============================================================
// Asset kind — one transfer path per variant
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum AssetKind {
    /// EGLD.
    Native,
    /// Fungible ESDT, nonce 0.
    Fungible,
    /// NFT: nonce > 0, quantity 1.
    NonFungible,
    /// SFT: nonce > 0, quantity > 1.
    SemiFungible,
}

// ============================================================
// Escrow Record — the central entity
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct EscrowRecord<M: ManagedTypeApi> {
    pub id: u64,
    pub depositor: ManagedAddress<M>,
    pub beneficiary: ManagedAddress<M>,
    /// The arbiter who created the record. Resolves disputes.
    pub escrow_owner: ManagedAddress<M>,
    pub status: EscrowStatus,
    pub payment_token: EgldOrEsdtTokenIdentifier<M>,
    pub total_amount: BigUint<M>,
    pub total_installments: u32,
    pub installments_paid: u32,
    pub payment_interval_seconds: u64,
    pub daily_interest_rate_bps: u64,
    pub interest_model: InterestModel,
    pub requires_guarantee: bool,
    /// Set once when the collateral arrives. Irreversible.
    pub guarantee_provided: bool,
    pub allow_partial_withdrawal: bool,
    pub start_timestamp: u64,
    pub last_payment_timestamp: u64,
    /// Creation time + the fixed auto-execute horizon.
    pub auto_execute_deadline: u64,
    /// 0 until a settlement proposal exists, then proposal time + window.
    pub settlement_deadline: u64,
    pub last_interaction: u64,
    pub depositor_approved: bool,
    pub beneficiary_approved: bool,
    pub owner_approved: bool,
    pub is_disputed: bool,
    pub dispute_raised_by: ManagedAddress<M>,
    pub has_settlement_proposal: bool,
    pub settlement_amount_to_depositor: BigUint<M>,
    pub settlement_amount_to_beneficiary: BigUint<M>,
    pub settlement_proposer: ManagedAddress<M>,
}

impl<M: ManagedTypeApi> EscrowRecord<M> {
    pub fn all_approved(&self) -> bool {
        self.depositor_approved && self.beneficiary_approved && self.owner_approved
    }

    pub fn fully_paid(&self) -> bool {
        self.installments_paid >= self.total_installments
    }
}

// ============================================================
// Installment Detail — one row of the schedule
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct InstallmentDetail<M: ManagedTypeApi> {
    pub due_date: u64,
    pub amount: BigUint<M>,
    pub paid: bool,
}

// ============================================================
// Guarantee Entry — one collateral position
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct GuaranteeEntry<M: ManagedTypeApi> {
    pub kind: AssetKind,
    pub amount: BigUint<M>,
}
