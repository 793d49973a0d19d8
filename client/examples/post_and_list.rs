use client::{
    logs::log_divider,
    print_kv,
    transactions::CustomRpcClient,
    LogColor,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let rpc = &CustomRpcClient::default();

    let payer = rpc.fund_new_account().await?;
    rpc.initialize_if_needed(&payer).await?;

    for content in ["gm", "first time posting", "69 lamports well spent"] {
        rpc.post_message(&payer, content).await?;
    }

    let counter = rpc.fetch_counter()?.expect("Board was just initialized");
    print_kv!("Messages", counter.count, LogColor::Info);

    for message in rpc.list_messages()?.iter().take(3) {
        log_divider();
        print_kv!(message.index, &message.content, LogColor::Highlight);
    }

    Ok(())
}
