//! Instruction builders and a funded program environment.

use anchor_lang::{AccountDeserialize, InstructionData, ToAccountMetas};
use litesvm::types::TransactionResult;
use litesvm::LiteSVM;
use solana_sdk::instruction::{Instruction, InstructionError};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use solana_sdk::sysvar;
use solana_sdk::transaction::{Transaction, TransactionError};

use shapz_staking::pda;
use shapz_staking::state::{GlobalConfig, StakingAccount};

use super::mock_accounts::{create_mint, create_token_account};
use super::setup::{deploy_upgradeable, program_bytes};

/// Deployed program, upgrade authority and a funded, not yet bound vault.
pub struct Env {
    pub svm: LiteSVM,
    pub master: Keypair,
    pub program_data: Pubkey,
    pub reward_mint: Pubkey,
    pub vault: Pubkey,
}

impl Env {
    /// `None` when the program has not been built.
    pub fn new(vault_funding: u64) -> Option<Self> {
        let elf = program_bytes()?;
        let mut svm = LiteSVM::new();
        let master = Keypair::new();
        svm.airdrop(&master.pubkey(), 10_000_000_000).unwrap();

        let program_data =
            deploy_upgradeable(&mut svm, &shapz_staking::ID, &master.pubkey(), &elf);
        let reward_mint = create_mint(&mut svm, 9, vault_funding);
        let vault = create_token_account(&mut svm, &reward_mint, &master.pubkey(), vault_funding);

        Some(Self {
            svm,
            master,
            program_data,
            reward_mint,
            vault,
        })
    }

    /// `new` followed by a successful `global_init`.
    pub fn initialized(vault_funding: u64) -> Option<Self> {
        let mut env = Self::new(vault_funding)?;
        let master = env.master.insecure_clone();
        let vault = env.vault;
        env.global_init(&master, &vault).unwrap();
        Some(env)
    }

    pub fn pool_authority(&self) -> Pubkey {
        pda::find_pool_authority_address().0
    }

    pub fn config_address(&self) -> Pubkey {
        pda::find_config_address(&self.pool_authority()).0
    }

    pub fn staking_address(&self, player: &Pubkey, mint: &Pubkey) -> Pubkey {
        pda::find_staking_address(&self.pool_authority(), player, mint).0
    }

    pub fn escrow_address(&self, player: &Pubkey, mint: &Pubkey) -> Pubkey {
        pda::find_escrow_address(&self.pool_authority(), player, mint).0
    }

    pub fn funded_player(&mut self) -> Keypair {
        let player = Keypair::new();
        self.svm.airdrop(&player.pubkey(), 1_000_000_000).unwrap();
        player
    }

    /// A one-of-one collateral mint held by `owner`: (mint, owner's token account).
    pub fn mint_nft(&mut self, owner: &Pubkey) -> (Pubkey, Pubkey) {
        let mint = create_mint(&mut self.svm, 0, 1);
        let account = create_token_account(&mut self.svm, &mint, owner, 1);
        (mint, account)
    }

    pub fn reward_account(&mut self, owner: &Pubkey) -> Pubkey {
        let mint = self.reward_mint;
        create_token_account(&mut self.svm, &mint, owner, 0)
    }

    pub fn config(&self) -> Option<GlobalConfig> {
        let account = self.svm.get_account(&self.config_address())?;
        GlobalConfig::try_deserialize(&mut account.data.as_slice()).ok()
    }

    /// `None` while the slot is closed.
    pub fn slot(&self, player: &Pubkey, mint: &Pubkey) -> Option<StakingAccount> {
        let account = self.svm.get_account(&self.staking_address(player, mint))?;
        StakingAccount::try_deserialize(&mut account.data.as_slice()).ok()
    }

    fn send(&mut self, ix: Instruction, signer: &Keypair) -> TransactionResult {
        // identical claims in a row would otherwise be deduplicated
        self.svm.expire_blockhash();
        let tx = Transaction::new_signed_with_payer(
            &[ix],
            Some(&signer.pubkey()),
            &[signer],
            self.svm.latest_blockhash(),
        );
        self.svm.send_transaction(tx)
    }

    pub fn global_init(&mut self, master: &Keypair, vault: &Pubkey) -> TransactionResult {
        let accounts = shapz_staking::accounts::GlobalInit {
            master_authority: master.pubkey(),
            vault_account: *vault,
            pool_authority: self.pool_authority(),
            config_account: self.config_address(),
            program: shapz_staking::ID,
            program_data: self.program_data,
            system_program: anchor_lang::system_program::ID,
            token_program: anchor_spl::token::ID,
        };
        let ix = Instruction {
            program_id: shapz_staking::ID,
            accounts: accounts.to_account_metas(None),
            data: shapz_staking::instruction::GlobalInit {}.data(),
        };
        self.send(ix, master)
    }

    pub fn stake(
        &mut self,
        player: &Keypair,
        mint: &Pubkey,
        collateral_account: &Pubkey,
        reward_account: &Pubkey,
    ) -> TransactionResult {
        let owner = player.pubkey();
        let accounts = shapz_staking::accounts::StakeShcp {
            player: owner,
            collateral_mint: *mint,
            pool_authority: self.pool_authority(),
            player_collateral_account: *collateral_account,
            escrow_account: self.escrow_address(&owner, mint),
            vault_account: self.vault,
            player_reward_account: *reward_account,
            staking_account: self.staking_address(&owner, mint),
            clock: sysvar::clock::id(),
            system_program: anchor_lang::system_program::ID,
            token_program: anchor_spl::token::ID,
        };
        let ix = Instruction {
            program_id: shapz_staking::ID,
            accounts: accounts.to_account_metas(None),
            data: shapz_staking::instruction::StakeShcp {}.data(),
        };
        self.send(ix, player)
    }

    pub fn claim(
        &mut self,
        player: &Keypair,
        mint: &Pubkey,
        reward_account: &Pubkey,
    ) -> TransactionResult {
        let owner = player.pubkey();
        let accounts = shapz_staking::accounts::ClaimShcpReward {
            player: owner,
            player_reward_account: *reward_account,
            vault_account: self.vault,
            pool_authority: self.pool_authority(),
            collateral_mint: *mint,
            staking_account: self.staking_address(&owner, mint),
            config_account: self.config_address(),
            token_program: anchor_spl::token::ID,
        };
        let ix = Instruction {
            program_id: shapz_staking::ID,
            accounts: accounts.to_account_metas(None),
            data: shapz_staking::instruction::ClaimShcpReward {}.data(),
        };
        self.send(ix, player)
    }

    pub fn unstake(
        &mut self,
        player: &Keypair,
        mint: &Pubkey,
        collateral_account: &Pubkey,
    ) -> TransactionResult {
        let owner = player.pubkey();
        let accounts = shapz_staking::accounts::UnstakeShcp {
            player: owner,
            escrow_account: self.escrow_address(&owner, mint),
            player_collateral_account: *collateral_account,
            pool_authority: self.pool_authority(),
            staking_account: self.staking_address(&owner, mint),
            token_program: anchor_spl::token::ID,
        };
        let ix = Instruction {
            program_id: shapz_staking::ID,
            accounts: accounts.to_account_metas(None),
            data: shapz_staking::instruction::UnstakeShcp {}.data(),
        };
        self.send(ix, player)
    }
}

/// Custom error code of a failed transaction.
pub fn error_code(result: TransactionResult) -> u32 {
    match result.expect_err("transaction should have failed").err {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => code,
        other => panic!("expected a program error, got {other:?}"),
    }
}
