use client::{
    pda::FortuneRequest,
    print_kv,
    transactions::{
        CustomRpcClient,
        SendTransactionConfig,
    },
    LogColor,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let rpc = &CustomRpcClient::new(
        None,
        Some(SendTransactionConfig {
            compute_budget: Some(200_000),
            debug_logs: Some(true),
        }),
    );

    let user = rpc.fund_new_account().await?;

    let per_user = rpc.get_fortune(&user, FortuneRequest::PerUser).await?;
    print_kv!("Per user", &per_user.fortune, LogColor::Highlight);

    // The second request skips counter 0, which the first one took.
    for _ in 0..2 {
        let (counter, fortune) = rpc.get_next_fortune(&user, 0).await?;
        print_kv!(format!("Counter {counter}"), &fortune.fortune, LogColor::Highlight);
    }

    Ok(())
}
