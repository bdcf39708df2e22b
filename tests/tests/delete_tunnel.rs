use gtpapp_tests::framework::*;
use openflow::{FlowModCommand, OFPG_ANY, OFPP_ANY};

#[async_std::test]
async fn delete_wildcards_output_port_and_group() -> anyhow::Result<()> {
    let (controller, switch, logger) = init();
    let tunnel = test_tunnel();

    controller
        .handle_event(&delete_event(&tunnel), &switch, &logger)
        .await?;

    for fm in switch.sent_flow_mods().await {
        assert_eq!(fm.command(), FlowModCommand::Delete);
        assert_eq!(fm.out_port(), OFPP_ANY);
        assert_eq!(fm.out_group(), OFPG_ANY);
        // Base-rule deletion selects by match only, never by cookie.
        assert_eq!(fm.cookie_mask(), 0);
    }
    Ok(())
}

#[async_std::test]
async fn delete_removes_active_rules() -> anyhow::Result<()> {
    let (controller, switch, logger) = init();
    let tunnel = test_tunnel();

    controller
        .handle_event(&add_event(&tunnel), &switch, &logger)
        .await?;
    assert_eq!(switch.entries().await.len(), 2);

    controller
        .handle_event(&delete_event(&tunnel), &switch, &logger)
        .await?;
    assert!(switch.entries().await.is_empty());
    Ok(())
}

#[async_std::test]
async fn delete_removes_active_and_gated_rules_together() -> anyhow::Result<()> {
    let (controller, switch, logger) = init();
    let tunnel = test_tunnel();

    controller
        .handle_event(&add_event(&tunnel), &switch, &logger)
        .await?;
    controller
        .handle_event(&discard_event(&tunnel), &switch, &logger)
        .await?;
    assert_eq!(switch.entries().await.len(), 4);

    // No Forward first: deletion must clear the gate overrides too.
    controller
        .handle_event(&delete_event(&tunnel), &switch, &logger)
        .await?;
    assert!(switch.entries().await.is_empty());
    Ok(())
}
