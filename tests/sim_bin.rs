use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["1", "--games", "3"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["games"], 3);
    assert_eq!(v["shots"].as_array().map(|a| a.len()), Some(3));
    assert!(v["duel"]["winner"].is_string());
}

#[test]
fn sim_binary_rejects_out_of_range_game_counts() {
    for games in ["0", "100001", "18446744073709551615"] {
        let output = Command::new(env!("CARGO_BIN_EXE_sim"))
            .args(["1", "--games", games])
            .output()
            .expect("failed to run sim binary");
        assert!(!output.status.success(), "--games {} should be refused", games);
        assert!(output.stdout.is_empty());
    }
}
