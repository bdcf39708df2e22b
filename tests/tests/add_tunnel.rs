use gtpapp::compact_imsi;
use gtpapp_tests::framework::*;
use openflow::{
    Action, ETH_TYPE_IPV4, FlowModCommand, Instruction, MacAddress, OFPP_LOCAL, OxmField,
};
use std::net::Ipv4Addr;

#[async_std::test]
async fn add_tunnel_installs_uplink_and_downlink_flows() -> anyhow::Result<()> {
    let (controller, switch, logger) = init();
    let tunnel = test_tunnel();

    controller
        .handle_event(&add_event(&tunnel), &switch, &logger)
        .await?;

    let sent = switch.sent().await;
    assert_eq!(sent.len(), 2);
    let (uplink, uplink_conn) = &sent[0];
    let (downlink, downlink_conn) = &sent[1];
    assert_eq!(*uplink_conn, CONNECTION);
    assert_eq!(*downlink_conn, CONNECTION);

    // Uplink: insert at default priority, matching exactly the GTP port and
    // the ingress tunnel id.
    assert_eq!(uplink.command(), FlowModCommand::Add);
    assert_eq!(uplink.priority(), 10);
    assert_eq!(
        uplink.match_fields(),
        &[OxmField::InPort(GTP_PORT), OxmField::TunnelId(100)]
    );

    // Decapsulation actions: MAC rewrite plus the IMSI metadata stamp, then
    // continue to the next table.
    let gtp_port_mac = MacAddress([0x02, 0, 0, 0, 0, 0x01]);
    let uplink_mac = MacAddress::try_from("00:11:22:33:44:55")?;
    assert_eq!(
        uplink.instructions(),
        &[
            Instruction::ApplyActions(vec![
                Action::SetField(OxmField::EthSrc(gtp_port_mac)),
                Action::SetField(OxmField::EthDst(uplink_mac)),
                Action::SetField(OxmField::Metadata(compact_imsi(&tunnel.imsi)?)),
            ]),
            Instruction::GotoTable(1),
        ]
    );

    // Downlink: insert at default priority, matching exactly the local
    // port, IPv4 and the UE address.
    assert_eq!(downlink.command(), FlowModCommand::Add);
    assert_eq!(downlink.priority(), 10);
    assert_eq!(
        downlink.match_fields(),
        &[
            OxmField::InPort(OFPP_LOCAL),
            OxmField::EthType(ETH_TYPE_IPV4),
            OxmField::Ipv4Dst(Ipv4Addr::new(10, 0, 0, 5)),
        ]
    );

    // Encapsulation actions: egress tunnel id, tunnel destination, IMSI
    // stamp, then continue to the next table.
    assert_eq!(
        downlink.instructions(),
        &[
            Instruction::ApplyActions(vec![
                Action::SetField(OxmField::TunnelId(200)),
                Action::SetField(OxmField::TunnelIpv4Dst(Ipv4Addr::new(192, 168, 1, 10))),
                Action::SetField(OxmField::Metadata(compact_imsi(&tunnel.imsi)?)),
            ]),
            Instruction::GotoTable(1),
        ]
    );

    Ok(())
}

#[async_std::test]
async fn tei_zero_is_a_valid_tunnel_id() -> anyhow::Result<()> {
    let (controller, switch, logger) = init();
    let mut tunnel = test_tunnel();
    tunnel.in_tei = 0;

    controller
        .handle_event(&add_event(&tunnel), &switch, &logger)
        .await?;

    let sent = switch.sent_flow_mods().await;
    assert_eq!(
        sent[0].match_fields(),
        &[OxmField::InPort(GTP_PORT), OxmField::TunnelId(0)]
    );
    Ok(())
}
