//! Integration tests for the session protocol.
//!
//! A scripted environment runs on the other end of an in-memory duplex pipe,
//! reading NUL-terminated actions and answering with reward lines.

use bandit_core::{AgentConfig, Algorithm, BanditPolicy, ScriptedRandom, SeededRandom, Session};
use tokio::io::{AsyncReadExt, AsyncWriteExt, DuplexStream};

/// Read one NUL-terminated action from the agent.
async fn read_action(stream: &mut DuplexStream) -> Option<usize> {
    let mut text = String::new();
    loop {
        let byte = stream.read_u8().await.ok()?;
        if byte == 0 {
            return text.parse().ok();
        }
        text.push(byte as char);
    }
}

/// Environment that answers `responses` in order, then closes.
///
/// Returns every action it received, including one read after the last
/// response when `read_final` is set.
async fn scripted_peer(
    mut stream: DuplexStream,
    responses: Vec<String>,
    read_final: bool,
) -> Vec<usize> {
    let mut actions = Vec::new();
    for response in responses {
        let Some(action) = read_action(&mut stream).await else {
            return actions;
        };
        actions.push(action);
        stream.write_all(response.as_bytes()).await.unwrap();
    }
    if read_final && let Some(action) = read_action(&mut stream).await {
        actions.push(action);
    }
    actions
}

#[tokio::test]
async fn one_response_then_close() {
    let (mut client, server) = tokio::io::duplex(1024);
    let peer = tokio::spawn(scripted_peer(server, vec!["1.0 X 3".into()], false));

    let config = AgentConfig::new(Algorithm::RoundRobin, 0).with_num_arms(5);
    let mut session = Session::from_config(&config, ScriptedRandom::new()).unwrap();
    let summary = session.run(&mut client).await.unwrap();

    let actions = peer.await.unwrap();
    assert_eq!(actions, vec![0]);

    // One more selection happened after parsing: round 3 of round-robin.
    assert_eq!(session.policy().statistics().last_chosen, Some(3));
    assert_eq!(summary.rounds, 3);
    assert_eq!(summary.last_reward, 1.0);
    assert!(summary.actions_sent <= 2);
}

#[tokio::test]
async fn peer_reads_final_action_then_closes() {
    let (mut client, server) = tokio::io::duplex(1024);
    let peer = tokio::spawn(scripted_peer(server, vec!["1.0 X 3".into()], true));

    let config = AgentConfig::new(Algorithm::RoundRobin, 0).with_num_arms(5);
    let mut session = Session::from_config(&config, ScriptedRandom::new()).unwrap();
    let summary = session.run(&mut client).await.unwrap();

    assert_eq!(peer.await.unwrap(), vec![0, 3]);
    assert_eq!(summary.actions_sent, 2);
    assert_eq!(session.round(), 3);
}

#[tokio::test]
async fn round_robin_follows_reported_rounds() {
    let responses: Vec<String> = (1..=6).map(|i| format!("0.5 , {i}")).collect();
    let (mut client, server) = tokio::io::duplex(1024);
    let peer = tokio::spawn(scripted_peer(server, responses, true));

    let config = AgentConfig::new(Algorithm::RoundRobin, 0).with_num_arms(4);
    let mut session = Session::from_config(&config, ScriptedRandom::new()).unwrap();
    let summary = session.run(&mut client).await.unwrap();

    assert_eq!(peer.await.unwrap(), vec![0, 1, 2, 3, 0, 1, 2]);
    assert_eq!(summary.rounds, 6);
    assert_eq!(summary.actions_sent, 7);
}

#[tokio::test]
async fn ucb_learns_from_wire_rewards() {
    // Arm 2 pays, the rest do not; rewards are scripted against the warm-up order.
    let responses = vec![
        "0 , 1".to_string(),
        "0 , 2".to_string(),
        "1 , 3".to_string(),
    ];
    let (mut client, server) = tokio::io::duplex(1024);
    let peer = tokio::spawn(scripted_peer(server, responses, true));

    let config = AgentConfig::new(Algorithm::Ucb, 0).with_num_arms(3);
    let mut session = Session::from_config(&config, ScriptedRandom::new()).unwrap();
    session.run(&mut client).await.unwrap();

    assert_eq!(peer.await.unwrap(), vec![0, 1, 2, 2]);
    let stats = session.policy().statistics();
    assert_eq!(stats.pull_count, vec![1, 1, 1]);
    assert_eq!(stats.estimated_mean, vec![0.0, 0.0, 1.0]);
}

#[tokio::test]
async fn malformed_response_keeps_previous_values() {
    let responses = vec!["0.25 , 1".to_string(), "garbage".to_string()];
    let (mut client, server) = tokio::io::duplex(1024);
    let peer = tokio::spawn(scripted_peer(server, responses, true));

    let config = AgentConfig::new(Algorithm::EpsilonGreedy, 0).with_num_arms(2);
    let mut session = Session::from_config(&config, ScriptedRandom::new()).unwrap();
    let summary = session.run(&mut client).await.unwrap();

    peer.await.unwrap();
    // The unparsable response repeats reward 0.25 and round 1.
    assert_eq!(summary.rounds, 1);
    assert_eq!(summary.last_reward, 0.25);
    assert_eq!(session.last_reward(), 0.25);
    let stats = session.policy().statistics();
    assert_eq!(stats.pull_count[0], 2);
    assert_eq!(stats.estimated_mean[0], 0.25);
}

#[tokio::test]
async fn thompson_sampling_settles_on_paying_arm() {
    // Serve a two-armed environment where arm 0 always pays and arm 1 never does.
    let (mut client, mut server) = tokio::io::duplex(1024);
    let peer = tokio::spawn(async move {
        let mut late_hits = 0;
        for round in 1..=400u64 {
            let Some(action) = read_action(&mut server).await else {
                break;
            };
            if round > 300 && action == 0 {
                late_hits += 1;
            }
            let reward = if action == 0 { 1 } else { 0 };
            server
                .write_all(format!("{reward} , {round}").as_bytes())
                .await
                .unwrap();
        }
        late_hits
    });

    let config = AgentConfig::new(Algorithm::ThompsonSampling, 99).with_num_arms(2);
    let mut session = Session::from_config(&config, SeededRandom::new(99)).unwrap();
    let summary = session.run(&mut client).await.unwrap();

    let late_hits = peer.await.unwrap();
    assert!(late_hits >= 95, "arm 0 chosen {late_hits}/100 late rounds");
    assert_eq!(summary.rounds, 400);
}
