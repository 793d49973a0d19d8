//! A thin wrapper over the blocking [`RpcClient`] that sends transactions, reads program accounts
//! back as views and runs the higher level message board and fortune cookie flows.

use anyhow::{
    bail,
    Context,
};
use colored::Colorize;
use itertools::Itertools;
use solana_client::{
    client_error::ClientError,
    rpc_client::RpcClient,
};
use solana_commitment_config::CommitmentConfig;
use solana_compute_budget_interface::ComputeBudgetInstruction;
use solana_sdk::{
    message::{
        Instruction,
        Message,
    },
    pubkey::Pubkey,
    signature::{
        Keypair,
        Signature,
        Signer,
    },
    transaction::Transaction,
};
use tollgate_interface::{
    error::MessageBoardError,
    message_board::validate_content,
};

use crate::{
    context::{
        fortune_cookie::FortuneCookieContext,
        message_board::MessageBoardContext,
    },
    logs::{
        log_error,
        log_info,
        log_success,
        log_warning,
        LogColor,
    },
    pda::FortuneRequest,
    pretty::instruction_error::PrettyInstructionError,
    views::{
        newest_first,
        FortuneView,
        MessageCounterView,
        MessageView,
    },
};

pub const DEFAULT_RPC_URL: &str = "http://localhost:8899";

pub const DEFAULT_FUND_AMOUNT: u64 = 10_000_000_000;

/// How many occupied fortune counters [`CustomRpcClient::get_next_fortune`] skips before giving
/// up.
pub const MAX_FORTUNE_COUNTER_SKIPS: u64 = 64;

/// `getMultipleAccounts` accepts at most this many addresses per call.
const MAX_MULTIPLE_ACCOUNTS: usize = 100;

pub struct SendTransactionConfig {
    pub compute_budget: Option<u32>,
    pub debug_logs: Option<bool>,
}

impl Default for SendTransactionConfig {
    fn default() -> Self {
        SendTransactionConfig {
            compute_budget: Default::default(),
            debug_logs: Some(true),
        }
    }
}

pub struct CustomRpcClient {
    pub client: RpcClient,
    pub config: SendTransactionConfig,
}

impl Default for CustomRpcClient {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl CustomRpcClient {
    pub fn new(client: Option<RpcClient>, config: Option<SendTransactionConfig>) -> Self {
        Self {
            client: client.unwrap_or_else(|| {
                RpcClient::new_with_commitment(DEFAULT_RPC_URL, CommitmentConfig::confirmed())
            }),
            config: config.unwrap_or_default(),
        }
    }

    pub fn new_from_url(url: &str, commitment: CommitmentConfig) -> Self {
        Self::new(Some(RpcClient::new_with_commitment(url, commitment)), None)
    }

    /// Airdrops [`DEFAULT_FUND_AMOUNT`] to `address` and waits for the airdrop to confirm.
    pub async fn fund_account(&self, address: &Pubkey) -> anyhow::Result<()> {
        let airdrop_signature = self
            .client
            .request_airdrop(address, DEFAULT_FUND_AMOUNT)
            .context("Failed to request airdrop")?;

        let mut i = 0;
        // Wait for airdrop confirmation.
        while !self
            .client
            .confirm_transaction(&airdrop_signature)
            .context("Couldn't confirm transaction")?
        {
            if i == 10 {
                bail!("Airdrop {airdrop_signature} to {address} wasn't confirmed");
            }
            std::thread::sleep(std::time::Duration::from_millis(500));
            i += 1;
        }

        Ok(())
    }

    /// Creates, funds and returns a new keypair.
    pub async fn fund_new_account(&self) -> anyhow::Result<Keypair> {
        let keypair = Keypair::new();
        self.fund_account(&keypair.pubkey()).await?;
        Ok(keypair)
    }

    pub async fn send_single_signer(
        &self,
        signer: &Keypair,
        instructions: impl AsRef<[Instruction]>,
    ) -> anyhow::Result<Signature> {
        self.send_and_confirm_txn(signer, &[], instructions.as_ref())
            .await
    }

    /// Signs with `payer` and `signers`, sends and confirms. A failed instruction is logged with
    /// its decoded program error before the error is returned.
    pub async fn send_and_confirm_txn(
        &self,
        payer: &Keypair,
        signers: &[&Keypair],
        instructions: &[Instruction],
    ) -> anyhow::Result<Signature> {
        match self.try_send(payer, signers, instructions) {
            Ok(sig) => {
                if matches!(self.config.debug_logs, Some(true)) {
                    let sender_info =
                        format!("{}: {}", "sender".color(LogColor::Gray), payer.pubkey());
                    log_success("Signature", format!("{sig}\n{sender_info}"));
                }
                Ok(sig)
            }
            Err(error) => {
                log_instruction_error(&error, &self.sent_instructions(instructions));
                log_info("Payer", payer.pubkey());

                Err(error).context("Failed transaction submission")
            }
        }
    }

    fn try_send(
        &self,
        payer: &Keypair,
        signers: &[&Keypair],
        instructions: &[Instruction],
    ) -> Result<Signature, ClientError> {
        let bh = self.client.get_latest_blockhash()?;

        let msg = Message::new(&self.sent_instructions(instructions), Some(&payer.pubkey()));

        let signers = std::iter::once(payer)
            .chain(signers.iter().copied())
            .unique_by(|kp| kp.pubkey())
            .collect_vec();
        let mut tx = Transaction::new_unsigned(msg);
        tx.try_sign(&signers, bh)?;

        self.client.send_and_confirm_transaction(&tx)
    }

    /// The instructions as sent: prefixed with the compute budget instructions when a budget is
    /// configured. Failed instruction indices refer to this list.
    fn sent_instructions(&self, instructions: &[Instruction]) -> Vec<Instruction> {
        self.config.compute_budget.map_or(instructions.to_vec(), |budget| {
            [
                vec![
                    ComputeBudgetInstruction::set_compute_unit_limit(budget),
                    ComputeBudgetInstruction::set_compute_unit_price(1),
                ],
                instructions.to_vec(),
            ]
            .concat()
        })
    }

    fn fetch_account(&self, address: &Pubkey) -> anyhow::Result<Option<solana_account::Account>> {
        self.client
            .get_account_with_commitment(address, self.client.commitment())
            .map(|response| response.value)
            .with_context(|| format!("Couldn't fetch account {address}"))
    }

    /// Returns the message counter, or `None` if the board hasn't been initialized.
    pub fn fetch_counter(&self) -> anyhow::Result<Option<MessageCounterView>> {
        let counter = MessageBoardContext::new().counter;
        self.fetch_account(&counter)?
            .map(|account| MessageCounterView::try_from_account(counter, &account))
            .transpose()
    }

    pub fn fetch_message(&self, address: &Pubkey) -> anyhow::Result<Option<MessageView>> {
        self.fetch_account(address)?
            .map(|account| MessageView::try_from_account(*address, &account))
            .transpose()
    }

    pub fn fetch_fortune(&self, address: &Pubkey) -> anyhow::Result<Option<FortuneView>> {
        self.fetch_account(address)?
            .map(|account| FortuneView::try_from_account(*address, &account))
            .transpose()
    }

    /// Initializes the message board unless the counter already exists. Losing an initialize
    /// race to another client counts as success.
    ///
    /// Returns the signature only if this call created the board.
    pub async fn initialize_if_needed(&self, payer: &Keypair) -> anyhow::Result<Option<Signature>> {
        if let Some(counter) = self.fetch_counter()? {
            log_info("Message board", format!("already initialized at {}", counter.address));
            return Ok(None);
        }

        let instructions = [MessageBoardContext::new().initialize(payer.pubkey())];
        let sent = self.sent_instructions(&instructions);
        match self.try_send(payer, &[], &instructions) {
            Ok(sig) => {
                log_success("Initialized", sig);
                Ok(Some(sig))
            }
            Err(error) => {
                let lost_race = PrettyInstructionError::new(&error, &sent)
                    .is_some_and(|pretty| {
                        pretty
                            .0
                            .is_message_board_error(MessageBoardError::AlreadyInitialized)
                    });
                if lost_race {
                    log_warning("Message board", "initialized concurrently by another client");
                    return Ok(None);
                }
                log_instruction_error(&error, &sent);
                Err(error).context("Failed to initialize the message board")
            }
        }
    }

    /// Posts `content` at the slot for the current count. Returns the post's index.
    ///
    /// If another post lands first, the program rejects this one and the error is returned. It is
    /// not retried.
    pub async fn post_message(
        &self,
        payer: &Keypair,
        content: &str,
    ) -> anyhow::Result<(u64, Signature)> {
        validate_content(content.as_bytes())
            .map_err(|e| anyhow::anyhow!("Can't post {content:?}: {e}"))?;

        let Some(counter) = self.fetch_counter()? else {
            bail!("The message board hasn't been initialized");
        };
        let index = counter.count;
        let post =
            MessageBoardContext::new().post_message(payer.pubkey(), index, content.as_bytes());
        let sig = self.send_single_signer(payer, [post]).await?;

        Ok((index, sig))
    }

    /// Fetches every post in `0..count`, newest first. Slots with no account are skipped.
    pub fn list_messages(&self) -> anyhow::Result<Vec<MessageView>> {
        let Some(counter) = self.fetch_counter()? else {
            return Ok(vec![]);
        };
        let board = MessageBoardContext::new();
        let addresses = (0..counter.count).map(|i| board.message_address(i)).collect_vec();

        let mut messages = Vec::with_capacity(addresses.len());
        for chunk in addresses.chunks(MAX_MULTIPLE_ACCOUNTS) {
            let accounts = self
                .client
                .get_multiple_accounts(chunk)
                .context("Couldn't fetch message accounts")?;
            for (address, account) in chunk.iter().zip(accounts) {
                match account {
                    Some(account) => {
                        messages.push(MessageView::try_from_account(*address, &account)?)
                    }
                    None => log_warning("Missing message", address),
                }
            }
        }

        Ok(newest_first(messages))
    }

    /// Requests a per-request fortune for `user`, starting at `start_counter` and skipping
    /// counters whose fortune account already exists.
    ///
    /// Returns the counter used and the new fortune.
    pub async fn get_next_fortune(
        &self,
        user: &Keypair,
        start_counter: u64,
    ) -> anyhow::Result<(u64, FortuneView)> {
        let ctx = FortuneCookieContext::new();
        let end = start_counter.saturating_add(MAX_FORTUNE_COUNTER_SKIPS);

        for counter in start_counter..end {
            let request = FortuneRequest::PerRequest { counter };
            let address = ctx.fortune_address(&user.pubkey(), request);
            if self.fetch_account(&address)?.is_some() {
                log_info("Fortune counter taken", counter);
                continue;
            }

            let fortune = self.get_fortune(user, request).await?;
            return Ok((counter, fortune));
        }

        bail!("Fortune counters {start_counter}..{end} are all taken for {}", user.pubkey())
    }

    /// Sends a single fortune request and reads the new fortune back.
    pub async fn get_fortune(
        &self,
        user: &Keypair,
        request: FortuneRequest,
    ) -> anyhow::Result<FortuneView> {
        let ctx = FortuneCookieContext::new();
        let address = ctx.fortune_address(&user.pubkey(), request);
        self.send_single_signer(user, [ctx.get_fortune(user.pubkey(), request)])
            .await?;

        self.fetch_fortune(&address)?
            .with_context(|| format!("Fortune account {address} missing after confirmation"))
    }
}

pub fn log_instruction_error(error: &ClientError, instructions: &[Instruction]) {
    match PrettyInstructionError::new(error, instructions) {
        Some(pretty) => eprint!("{pretty}"),
        None => log_error("Transaction", error),
    }
}
