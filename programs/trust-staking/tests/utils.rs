// Test utilities for the trust staking program

#![allow(dead_code)]

use anchor_lang::AccountDeserialize;
use litesvm::LiteSVM;
use litesvm_token::{get_spl_account, CreateMint, MintTo};
use solana_sdk::{
    hash::hash,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};

// Program ID matching declare_id!
pub const PROGRAM_ID: Pubkey = Pubkey::new_from_array(trust_staking::ID.to_bytes());

// Standard program IDs
pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;
use solana_system_interface::program::ID as system_program;

// PDA Seeds
pub const REGISTRAR: &[u8] = b"registrar";
pub const REGISTRAR_SIGNER: &[u8] = b"registrar_signer";
pub const TREASURY_VAULT: &[u8] = b"treasury_vault";
pub const STAKE_VAULT: &[u8] = b"stake_vault";
pub const CURRENCY_VAULT: &[u8] = b"currency_vault";
pub const MEMBER: &[u8] = b"member";
pub const UTILITY_VAULT: &[u8] = b"utility_vault";
pub const REWARD_VAULT: &[u8] = b"reward_vault";
pub const ROUND: &[u8] = b"round";
pub const TRUST_CHECK: &[u8] = b"trust_check";

// Token decimals
pub const UTILITY_DECIMALS: u8 = 9;
pub const REWARD_DECIMALS: u8 = 9;
pub const TOKEN: u64 = 1_000_000_000;

// Registrar parameters used by most tests
pub const TIMELOCK: i64 = 60;
pub const UTILITY_PER_SOL: u64 = 100;
pub const REWARD_PER_SOL: u64 = 10;
pub const MIN_PURCHASE: u64 = 1_000;
pub const TREASURY_SUPPLY: u64 = 1_000 * TOKEN;

// Reward policy as passed to initialize
#[derive(Clone, Copy, Debug)]
pub enum Policy {
    Flat { rate_bps: u16 },
    TrusterBonus { base_bps: u16, per_truster_bps: u16 },
}

impl Policy {
    fn encode(&self, data: &mut Vec<u8>) {
        match *self {
            Policy::Flat { rate_bps } => {
                data.push(0);
                data.extend_from_slice(&rate_bps.to_le_bytes());
            }
            Policy::TrusterBonus {
                base_bps,
                per_truster_bps,
            } => {
                data.push(1);
                data.extend_from_slice(&base_bps.to_le_bytes());
                data.extend_from_slice(&per_truster_bps.to_le_bytes());
            }
        }
    }
}

// ======================== HELPERS ========================

/// Build Anchor instruction discriminator (first 8 bytes of sha256("global:method_name"))
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let preimage = format!("global:{}", method);
    let hash = hash(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash.to_bytes()[..8]);
    discriminator
}

// Setup LiteSVM with the program (`anchor build` writes it to the workspace target)
pub fn setup_svm() -> LiteSVM {
    let mut svm = LiteSVM::new();
    let program_bytes = include_bytes!("../../../target/deploy/trust_staking.so");
    let _ = svm.add_program(PROGRAM_ID, program_bytes);
    svm
}

// Create and fund account
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

/// Move the clock forward. LiteSVM keeps slot and timestamp separately, so
/// both are advanced.
pub fn advance_time(svm: &mut LiteSVM, seconds: u64) {
    let mut clock: solana_sdk::clock::Clock = svm.get_sysvar();
    clock.unix_timestamp += seconds as i64;
    svm.set_sysvar(&clock);

    let current_slot = clock.slot;
    svm.warp_to_slot(current_slot + (seconds * 2) + 5);
}

pub fn send_tx_expect_success(
    svm: &mut LiteSVM,
    ix: Instruction,
    payer: &Keypair,
    signers: &[&Keypair],
) {
    svm.expire_blockhash();
    let blockhash = svm.latest_blockhash();

    let tx = Transaction::new_signed_with_payer(&[ix], Some(&payer.pubkey()), signers, blockhash);

    let result = svm.send_transaction(tx);
    assert!(result.is_ok(), "Transaction should succeed: {:?}", result.err());
}

pub fn send_tx_expect_failure(
    svm: &mut LiteSVM,
    ix: Instruction,
    payer: &Keypair,
    signers: &[&Keypair],
) -> String {
    svm.expire_blockhash();
    let blockhash = svm.latest_blockhash();

    let tx = Transaction::new_signed_with_payer(&[ix], Some(&payer.pubkey()), signers, blockhash);
    let result = svm.send_transaction(tx);
    assert!(result.is_err(), "Transaction should have failed");
    format!("{:?}", result.err().unwrap())
}

// Custom program error as it shows up in a failed transaction
pub fn custom_error(error: trust_staking::errors::StakingError) -> String {
    format!("Custom({})", u32::from(error))
}

pub fn assert_program_error(err: &str, error: trust_staking::errors::StakingError) {
    let expected = custom_error(error);
    assert!(
        err.contains(&expected),
        "Expected {:?} ({}), got: {}",
        error,
        expected,
        err
    );
}

pub fn token_balance(svm: &LiteSVM, account: &Pubkey) -> u64 {
    let account: spl_token::state::Account =
        get_spl_account(svm, account).expect("Token account should exist");
    account.amount
}

// Deserialize a program account
pub fn fetch<T: AccountDeserialize>(svm: &LiteSVM, address: &Pubkey) -> T {
    let account = svm.get_account(address).expect("Account should exist");
    T::try_deserialize(&mut account.data.as_slice()).expect("Account should deserialize")
}

// Compare a program-side key with a test-side key
pub fn same_key(program_key: &anchor_lang::prelude::Pubkey, key: &Pubkey) -> bool {
    program_key.to_bytes() == key.to_bytes()
}

// ======================== PDAS ========================

pub fn derive_registrar_pda(utility_mint: &Pubkey, reward_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[REGISTRAR, utility_mint.as_ref(), reward_mint.as_ref()],
        &PROGRAM_ID,
    )
}

pub fn derive_registrar_signer_pda(registrar: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[REGISTRAR_SIGNER, registrar.as_ref()], &PROGRAM_ID)
}

pub fn derive_vault_pda(seed: &[u8], owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[seed, owner.as_ref()], &PROGRAM_ID)
}

pub fn derive_member_pda(registrar: &Pubkey, beneficiary: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[MEMBER, registrar.as_ref(), beneficiary.as_ref()],
        &PROGRAM_ID,
    )
}

pub fn derive_round_pda(registrar: &Pubkey, sequence_number: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[ROUND, registrar.as_ref(), &sequence_number.to_le_bytes()],
        &PROGRAM_ID,
    )
}

pub fn derive_trust_check_pda(truster_member: &Pubkey, index: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[TRUST_CHECK, truster_member.as_ref(), &index.to_le_bytes()],
        &PROGRAM_ID,
    )
}

// Every address of one registrar
#[derive(Clone, Copy, Debug)]
pub struct RegistrarKeys {
    pub utility_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub registrar: Pubkey,
    pub registrar_signer: Pubkey,
    pub treasury_vault: Pubkey,
    pub stake_vault: Pubkey,
    pub currency_vault: Pubkey,
}

impl RegistrarKeys {
    pub fn new(utility_mint: Pubkey, reward_mint: Pubkey) -> Self {
        let (registrar, _) = derive_registrar_pda(&utility_mint, &reward_mint);
        let (registrar_signer, _) = derive_registrar_signer_pda(&registrar);
        Self {
            utility_mint,
            reward_mint,
            registrar,
            registrar_signer,
            treasury_vault: derive_vault_pda(TREASURY_VAULT, &registrar).0,
            stake_vault: derive_vault_pda(STAKE_VAULT, &registrar).0,
            currency_vault: derive_vault_pda(CURRENCY_VAULT, &registrar).0,
        }
    }

    pub fn round(&self, sequence_number: u64) -> Pubkey {
        derive_round_pda(&self.registrar, sequence_number).0
    }
}

// Every address of one member
#[derive(Clone, Copy, Debug)]
pub struct MemberKeys {
    pub beneficiary: Pubkey,
    pub member: Pubkey,
    pub utility_vault: Pubkey,
    pub reward_vault: Pubkey,
}

impl MemberKeys {
    pub fn new(registrar: &Pubkey, beneficiary: Pubkey) -> Self {
        let (member, _) = derive_member_pda(registrar, &beneficiary);
        Self {
            beneficiary,
            member,
            utility_vault: derive_vault_pda(UTILITY_VAULT, &member).0,
            reward_vault: derive_vault_pda(REWARD_VAULT, &member).0,
        }
    }

    pub fn trust_check(&self, index: u64) -> Pubkey {
        derive_trust_check_pda(&self.member, index).0
    }
}

// ======================== INSTRUCTIONS ========================

pub fn build_initialize_ix(
    authority: &Pubkey,
    keys: &RegistrarKeys,
    round_timelock: i64,
    utility_per_sol: u64,
    reward_per_sol: u64,
    min_purchase: u64,
    policy: Policy,
) -> Instruction {
    let mut data = anchor_discriminator("initialize").to_vec();
    data.extend_from_slice(&round_timelock.to_le_bytes());
    data.extend_from_slice(&utility_per_sol.to_le_bytes());
    data.extend_from_slice(&reward_per_sol.to_le_bytes());
    data.extend_from_slice(&min_purchase.to_le_bytes());
    policy.encode(&mut data);

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new_readonly(keys.utility_mint, false),
            AccountMeta::new_readonly(keys.reward_mint, false),
            AccountMeta::new(keys.registrar, false),
            AccountMeta::new_readonly(keys.registrar_signer, false),
            AccountMeta::new(keys.treasury_vault, false),
            AccountMeta::new(keys.stake_vault, false),
            AccountMeta::new(keys.currency_vault, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

pub fn build_create_member_ix(
    keys: &RegistrarKeys,
    member: &MemberKeys,
    accepts_delegation: bool,
) -> Instruction {
    let mut data = anchor_discriminator("create_member").to_vec();
    data.push(accepts_delegation as u8);

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(member.beneficiary, true),
            AccountMeta::new_readonly(keys.registrar, false),
            AccountMeta::new(member.member, false),
            AccountMeta::new_readonly(keys.utility_mint, false),
            AccountMeta::new_readonly(keys.reward_mint, false),
            AccountMeta::new(member.utility_vault, false),
            AccountMeta::new(member.reward_vault, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

pub fn build_buy_ix(keys: &RegistrarKeys, member: &MemberKeys, amount: u64) -> Instruction {
    let mut data = anchor_discriminator("buy").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(member.beneficiary, true),
            AccountMeta::new_readonly(keys.registrar, false),
            AccountMeta::new_readonly(keys.registrar_signer, false),
            AccountMeta::new(member.member, false),
            AccountMeta::new(member.utility_vault, false),
            AccountMeta::new(keys.treasury_vault, false),
            AccountMeta::new(keys.currency_vault, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

pub fn build_sell_all_ix(keys: &RegistrarKeys, member: &MemberKeys) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(member.beneficiary, true),
            AccountMeta::new_readonly(keys.registrar, false),
            AccountMeta::new(member.member, false),
            AccountMeta::new(member.utility_vault, false),
            AccountMeta::new(keys.treasury_vault, false),
            AccountMeta::new(keys.currency_vault, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: anchor_discriminator("sell_all").to_vec(),
    }
}

pub fn build_sell_reward_ix(keys: &RegistrarKeys, member: &MemberKeys, amount: u64) -> Instruction {
    let mut data = anchor_discriminator("sell_reward").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(member.beneficiary, true),
            AccountMeta::new_readonly(keys.registrar, false),
            AccountMeta::new_readonly(member.member, false),
            AccountMeta::new(member.reward_vault, false),
            AccountMeta::new(keys.reward_mint, false),
            AccountMeta::new(keys.currency_vault, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

pub fn build_transfer_tokens_ix(
    keys: &RegistrarKeys,
    member: &MemberKeys,
    destination: &Pubkey,
    amount: u64,
) -> Instruction {
    let mut data = anchor_discriminator("transfer_tokens").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(member.beneficiary, true),
            AccountMeta::new_readonly(keys.registrar, false),
            AccountMeta::new(member.member, false),
            AccountMeta::new(member.utility_vault, false),
            AccountMeta::new(*destination, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data,
    }
}

pub fn build_start_round_ix(
    authority: &Pubkey,
    keys: &RegistrarKeys,
    sequence_number: u64,
    is_final: bool,
) -> Instruction {
    let mut data = anchor_discriminator("start_round").to_vec();
    data.push(is_final as u8);

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new(keys.registrar, false),
            AccountMeta::new(keys.round(sequence_number), false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

pub fn build_stake_ix(keys: &RegistrarKeys, member: &MemberKeys, round: &Pubkey) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(member.beneficiary, true),
            AccountMeta::new(keys.registrar, false),
            AccountMeta::new(*round, false),
            AccountMeta::new(member.member, false),
            AccountMeta::new(member.utility_vault, false),
            AccountMeta::new(keys.stake_vault, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data: anchor_discriminator("stake").to_vec(),
    }
}

// `trusters` are the staked trusters whose vaults are passed as remaining accounts
pub fn build_unstake_ix(
    keys: &RegistrarKeys,
    member: &MemberKeys,
    round: &Pubkey,
    trusters: &[&MemberKeys],
) -> Instruction {
    let mut accounts = vec![
        AccountMeta::new_readonly(member.beneficiary, true),
        AccountMeta::new(keys.registrar, false),
        AccountMeta::new_readonly(keys.registrar_signer, false),
        AccountMeta::new(*round, false),
        AccountMeta::new(member.member, false),
        AccountMeta::new(member.utility_vault, false),
        AccountMeta::new(member.reward_vault, false),
        AccountMeta::new(keys.stake_vault, false),
        AccountMeta::new(keys.reward_mint, false),
        AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
    ];
    for truster in trusters {
        accounts.push(AccountMeta::new(truster.utility_vault, false));
        accounts.push(AccountMeta::new(truster.reward_vault, false));
    }

    Instruction {
        program_id: PROGRAM_ID,
        accounts,
        data: anchor_discriminator("unstake").to_vec(),
    }
}

pub fn build_trust_to_member_ix(
    keys: &RegistrarKeys,
    round: &Pubkey,
    truster: &MemberKeys,
    trustee: &MemberKeys,
    check_index: u64,
    amount: u64,
) -> Instruction {
    let mut data = anchor_discriminator("trust_to_member").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(truster.beneficiary, true),
            AccountMeta::new_readonly(keys.registrar, false),
            AccountMeta::new_readonly(keys.registrar_signer, false),
            AccountMeta::new_readonly(*round, false),
            AccountMeta::new(truster.member, false),
            AccountMeta::new(truster.utility_vault, false),
            AccountMeta::new(trustee.member, false),
            AccountMeta::new(trustee.utility_vault, false),
            AccountMeta::new(keys.stake_vault, false),
            AccountMeta::new(truster.trust_check(check_index), false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

pub fn build_exit_sharing_ix(
    keys: &RegistrarKeys,
    round: &Pubkey,
    truster: &MemberKeys,
    trustee: &MemberKeys,
    check_index: u64,
) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(truster.beneficiary, true),
            AccountMeta::new_readonly(keys.registrar, false),
            AccountMeta::new_readonly(keys.registrar_signer, false),
            AccountMeta::new_readonly(*round, false),
            AccountMeta::new(truster.member, false),
            AccountMeta::new(truster.utility_vault, false),
            AccountMeta::new(truster.reward_vault, false),
            AccountMeta::new(trustee.member, false),
            AccountMeta::new(trustee.utility_vault, false),
            AccountMeta::new(truster.trust_check(check_index), false),
            AccountMeta::new(keys.stake_vault, false),
            AccountMeta::new(keys.reward_mint, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data: anchor_discriminator("exit_sharing").to_vec(),
    }
}

pub fn build_release_trust_ix(
    keys: &RegistrarKeys,
    trustee: &MemberKeys,
    truster: &MemberKeys,
) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(trustee.beneficiary, true),
            AccountMeta::new_readonly(keys.registrar, false),
            AccountMeta::new(trustee.member, false),
            AccountMeta::new(trustee.utility_vault, false),
            AccountMeta::new_readonly(truster.member, false),
            AccountMeta::new(truster.utility_vault, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data: anchor_discriminator("release_trust").to_vec(),
    }
}

pub fn build_check_unstaked_ix(
    keys: &RegistrarKeys,
    round: &Pubkey,
    truster: &MemberKeys,
    trustee: &MemberKeys,
    check_index: u64,
) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(truster.beneficiary, true),
            AccountMeta::new_readonly(keys.registrar, false),
            AccountMeta::new_readonly(*round, false),
            AccountMeta::new(truster.member, false),
            AccountMeta::new(truster.utility_vault, false),
            AccountMeta::new(trustee.member, false),
            AccountMeta::new(trustee.utility_vault, false),
            AccountMeta::new(truster.trust_check(check_index), false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data: anchor_discriminator("check_unstaked").to_vec(),
    }
}

pub fn build_check_exit_ix(
    keys: &RegistrarKeys,
    truster: &MemberKeys,
    trustee: &MemberKeys,
    check_index: u64,
) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(truster.beneficiary, true),
            AccountMeta::new_readonly(keys.registrar, false),
            AccountMeta::new(truster.member, false),
            AccountMeta::new_readonly(trustee.member, false),
            AccountMeta::new(truster.trust_check(check_index), false),
        ],
        data: anchor_discriminator("check_exit").to_vec(),
    }
}

pub fn build_close_trust_check_ix(truster: &MemberKeys, check_index: u64) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(truster.beneficiary, true),
            AccountMeta::new_readonly(truster.member, false),
            AccountMeta::new(truster.trust_check(check_index), false),
        ],
        data: anchor_discriminator("close_trust_check").to_vec(),
    }
}

pub fn build_withdraw_currency_ix(
    authority: &Pubkey,
    keys: &RegistrarKeys,
    round: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new_readonly(keys.registrar, false),
            AccountMeta::new(*round, false),
            AccountMeta::new(keys.currency_vault, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: anchor_discriminator("withdraw_currency").to_vec(),
    }
}

// ======================== FIXTURES ========================

// Mints, registrar and a funded treasury
pub fn setup_registrar(svm: &mut LiteSVM, authority: &Keypair, policy: Policy) -> RegistrarKeys {
    let utility_mint = CreateMint::new(svm, authority)
        .authority(&authority.pubkey())
        .decimals(UTILITY_DECIMALS)
        .send()
        .expect("Failed to create utility mint");

    let reward_mint = CreateMint::new(svm, authority)
        .authority(&authority.pubkey())
        .decimals(REWARD_DECIMALS)
        .send()
        .expect("Failed to create reward mint");

    // Reward mint authority moves to the registrar signer before initialize
    let keys = RegistrarKeys::new(utility_mint, reward_mint);
    let set_authority_ix = spl_token::instruction::set_authority(
        &TOKEN_PROGRAM_ID,
        &reward_mint,
        Some(&keys.registrar_signer),
        spl_token::instruction::AuthorityType::MintTokens,
        &authority.pubkey(),
        &[],
    )
    .expect("Failed to build set_authority");
    send_tx_expect_success(svm, set_authority_ix, authority, &[authority]);

    send_tx_expect_success(
        svm,
        build_initialize_ix(
            &authority.pubkey(),
            &keys,
            TIMELOCK,
            UTILITY_PER_SOL,
            REWARD_PER_SOL,
            MIN_PURCHASE,
            policy,
        ),
        authority,
        &[authority],
    );

    MintTo::new(svm, authority, &utility_mint, &keys.treasury_vault, TREASURY_SUPPLY)
        .owner(authority)
        .send()
        .expect("Failed to fund treasury");

    keys
}

pub fn setup_member(
    svm: &mut LiteSVM,
    keys: &RegistrarKeys,
    lamports: u64,
    accepts_delegation: bool,
) -> (Keypair, MemberKeys) {
    let beneficiary = create_funded_account(svm, lamports);
    let member = MemberKeys::new(&keys.registrar, beneficiary.pubkey());
    send_tx_expect_success(
        svm,
        build_create_member_ix(keys, &member, accepts_delegation),
        &beneficiary,
        &[&beneficiary],
    );
    (beneficiary, member)
}

pub fn start_round(
    svm: &mut LiteSVM,
    authority: &Keypair,
    keys: &RegistrarKeys,
    sequence_number: u64,
    is_final: bool,
) -> Pubkey {
    send_tx_expect_success(
        svm,
        build_start_round_ix(&authority.pubkey(), keys, sequence_number, is_final),
        authority,
        &[authority],
    );
    keys.round(sequence_number)
}
