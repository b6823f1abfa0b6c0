//! SPL token ledger client
//!
//! Assembles the creation transaction: protocol fee transfer, rent-exempt
//! mint account, mint initialization, an initial-supply holding account, and
//! optional mint-authority revocation. The payer signature and broadcast are
//! delegated to the identity provider.

use std::sync::Arc;

use async_trait::async_trait;
use solana_sdk::program_pack::Pack;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::rent::Rent;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use solana_sdk::system_instruction;
use solana_sdk::transaction::Transaction;
use spl_token::instruction::{self as token_instruction, AuthorityType};
use spl_token::state::{Account, Mint};

use crate::domain::providers::{CreateAssetSpec, IdentityProvider, LedgerClient};
use crate::infrastructure::rpc::JsonRpcSender;
use crate::shared::error::TokenError;
use crate::shared::types::{Network, TokenResult};

/// Ledger client that mints fungible assets through the SPL token program
pub struct SplLedgerClient {
    identity: Arc<dyn IdentityProvider>,
    sender: JsonRpcSender,
    fee_wallet: Pubkey,
}

impl SplLedgerClient {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        sender: JsonRpcSender,
        fee_wallet: Pubkey,
    ) -> Self {
        Self {
            identity,
            sender,
            fee_wallet,
        }
    }

    fn build_instructions(
        &self,
        spec: &CreateAssetSpec,
        mint: &Pubkey,
        holding: &Pubkey,
    ) -> TokenResult<Vec<solana_sdk::instruction::Instruction>> {
        let payer = spec.payer;
        let rent = Rent::default();
        let token_program = spl_token::id();

        let freeze_authority = if spec.freeze_authority_enabled {
            Some(&payer)
        } else {
            None
        };

        let mut instructions = vec![
            system_instruction::transfer(&payer, &self.fee_wallet, spec.fee_lamports),
            system_instruction::create_account(
                &payer,
                mint,
                rent.minimum_balance(Mint::LEN),
                Mint::LEN as u64,
                &token_program,
            ),
            token_instruction::initialize_mint(
                &token_program,
                mint,
                &payer,
                freeze_authority,
                spec.decimals,
            )
            .map_err(|e| TokenError::internal(format!("initialize_mint: {}", e)))?,
        ];

        if spec.initial_supply > 0 {
            instructions.push(system_instruction::create_account(
                &payer,
                holding,
                rent.minimum_balance(Account::LEN),
                Account::LEN as u64,
                &token_program,
            ));
            instructions.push(
                token_instruction::initialize_account(&token_program, holding, mint, &payer)
                    .map_err(|e| TokenError::internal(format!("initialize_account: {}", e)))?,
            );
            instructions.push(
                token_instruction::mint_to(
                    &token_program,
                    mint,
                    holding,
                    &payer,
                    &[],
                    spec.initial_supply,
                )
                .map_err(|e| TokenError::internal(format!("mint_to: {}", e)))?,
            );
        }

        // The payer must hold the mint authority while the initial supply is
        // minted; revoke it afterwards when it is not retained
        if !spec.mint_authority_retained {
            instructions.push(
                token_instruction::set_authority(
                    &token_program,
                    mint,
                    None,
                    AuthorityType::MintTokens,
                    &payer,
                    &[],
                )
                .map_err(|e| TokenError::internal(format!("set_authority: {}", e)))?,
            );
        }

        Ok(instructions)
    }
}

#[async_trait]
impl LedgerClient for SplLedgerClient {
    async fn create_fungible_asset(
        &self,
        spec: &CreateAssetSpec,
        network: Network,
    ) -> TokenResult<Pubkey> {
        let mint_keypair = Keypair::new();
        let holding_keypair = Keypair::new();
        let mint = mint_keypair.pubkey();

        let instructions =
            self.build_instructions(spec, &mint, &holding_keypair.pubkey())?;

        let blockhash = self.sender.get_latest_blockhash(network).await?;
        let mut tx = Transaction::new_with_payer(&instructions, Some(&spec.payer));
        let mut signers: Vec<&Keypair> = vec![&mint_keypair];
        if spec.initial_supply > 0 {
            signers.push(&holding_keypair);
        }
        tx.try_partial_sign(&signers, blockhash)?;

        let signature = self.identity.sign_and_send(tx, network).await?;
        log::info!(
            "Mint {} created on {} in transaction {}",
            mint,
            network.name(),
            signature
        );
        Ok(mint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::providers::MockIdentityProvider;
    use crate::shared::constants::DEFAULT_FEE_WALLET;
    use std::str::FromStr;

    fn spec(initial_supply: u64, mint_retained: bool, freeze: bool) -> CreateAssetSpec {
        CreateAssetSpec {
            payer: Pubkey::new_unique(),
            decimals: 9,
            initial_supply,
            mint_authority_retained: mint_retained,
            freeze_authority_enabled: freeze,
            fee_lamports: 150_000_000,
        }
    }

    fn client() -> SplLedgerClient {
        SplLedgerClient::new(
            Arc::new(MockIdentityProvider::new()),
            JsonRpcSender::new(),
            Pubkey::from_str(DEFAULT_FEE_WALLET).expect("fee wallet should parse"),
        )
    }

    #[test]
    fn test_instruction_sequence_with_supply() {
        let client = client();
        let spec = spec(1_000_000_000, true, false);
        let mint = Pubkey::new_unique();
        let holding = Pubkey::new_unique();

        let instructions = client
            .build_instructions(&spec, &mint, &holding)
            .expect("instructions should build");

        // fee transfer, create mint, init mint, create holding, init holding, mint_to
        assert_eq!(instructions.len(), 6);
        assert_eq!(instructions[0].program_id, solana_sdk::system_program::id());
        assert_eq!(instructions[2].program_id, spl_token::id());
    }

    #[test]
    fn test_zero_supply_skips_holding_account() {
        let client = client();
        let spec = spec(0, true, false);
        let mint = Pubkey::new_unique();
        let holding = Pubkey::new_unique();

        let instructions = client
            .build_instructions(&spec, &mint, &holding)
            .expect("instructions should build");

        assert_eq!(instructions.len(), 3);
    }

    #[test]
    fn test_revocation_appended_when_mint_not_retained() {
        let client = client();
        let spec = spec(1_000_000_000, false, false);
        let mint = Pubkey::new_unique();
        let holding = Pubkey::new_unique();

        let instructions = client
            .build_instructions(&spec, &mint, &holding)
            .expect("instructions should build");

        // the trailing set_authority revokes minting
        assert_eq!(instructions.len(), 7);
        assert_eq!(
            instructions.last().map(|ix| ix.program_id),
            Some(spl_token::id())
        );
    }
}
