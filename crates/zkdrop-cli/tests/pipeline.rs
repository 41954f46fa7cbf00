//! End-to-end CLI workflow: keys, registry, deployment, claims and the token ledger.

#![allow(
    missing_docs,
    clippy::indexing_slicing,
    reason = "Test code indexes JSON fields directly"
)]

use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use tempfile::{TempDir, tempdir};

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: tempdir().expect("Failed to create temp dir"),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn zkdrop(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        cargo_bin_cmd!("zkdrop")
            .current_dir(self.dir.path())
            .env("RUST_LOG", "info")
            .args(args)
            .assert()
    }

    fn generate_key(&self, name: &str) -> String {
        let key = format!("{name}.key");
        let public = format!("{name}.pub");
        self.zkdrop(&[
            "key",
            "generate",
            "--output",
            key.as_str(),
            "--identity-out",
            public.as_str(),
        ])
        .success();
        std::fs::read_to_string(self.path(&public))
            .expect("identity file should exist")
            .trim()
            .to_owned()
    }

    fn state(&self) -> Value {
        read_json(&self.path("state.json"))
    }

    fn setup(&self, extra_deploy_args: &[&str]) -> Setup {
        let admin = self.generate_key("admin");
        let alice = self.generate_key("alice");
        let bob = self.generate_key("bob");

        std::fs::write(
            self.path("identities.json"),
            serde_json::to_string(&[&alice, &bob]).expect("serialize identities"),
        )
        .expect("write identities");

        self.zkdrop(&["registry", "build"]).success();

        let contract_id = "07".repeat(32);
        let mut deploy = vec![
            "contract",
            "deploy",
            "--admin",
            admin.as_str(),
            "--contract-id",
            contract_id.as_str(),
        ];
        deploy.extend_from_slice(extra_deploy_args);
        self.zkdrop(&deploy).success();
        self.zkdrop(&["contract", "set-commitment", "--registry", "registry.json"])
            .success();

        Setup { admin, alice, bob }
    }
}

struct Setup {
    admin: String,
    alice: String,
    bob: String,
}

fn read_json(path: &Path) -> Value {
    let data = std::fs::read_to_string(path).expect("file should exist");
    serde_json::from_str(&data).expect("file should hold JSON")
}

fn balance_of(state: &Value, account: &str) -> u64 {
    state["balances"]
        .as_array()
        .expect("balances array")
        .iter()
        .find(|entry| entry["account"] == account)
        .and_then(|entry| entry["amount"].as_u64())
        .unwrap_or(0)
}

#[test]
fn claim_once_then_reject_replay() {
    let ws = Workspace::new();
    let Setup { alice, bob, .. } = ws.setup(&[]);

    let deployed = ws.state();
    assert_ne!(deployed["commitment"], "00".repeat(32));

    ws.zkdrop(&["claim", "check-inclusion", "--identity", alice.as_str()])
        .success();
    ws.zkdrop(&["claim", "run", "--identity", alice.as_str()])
        .success();

    let claimed = ws.state();
    assert_ne!(claimed["nullifiers"], deployed["nullifiers"]);
    assert_eq!(claimed["total_supply"], 0);

    // Second claim against the updated registry hits the claimed flag.
    ws.zkdrop(&["claim", "run", "--identity", alice.as_str()])
        .failure();
    assert_eq!(ws.state(), claimed);

    // Bob can still claim after Alice.
    ws.zkdrop(&["claim", "prepare", "--identity", bob.as_str()])
        .success();
    ws.zkdrop(&[
        "claim",
        "run",
        "--identity",
        bob.as_str(),
        "--prepared",
        "claim-prepared.json",
    ])
    .success();
    assert_ne!(ws.state()["nullifiers"], claimed["nullifiers"]);
}

#[test]
fn stale_prepared_claim_is_rejected() {
    let ws = Workspace::new();
    let Setup { alice, bob, .. } = ws.setup(&[]);

    ws.zkdrop(&["claim", "prepare", "--identity", bob.as_str()])
        .success();
    ws.zkdrop(&["claim", "run", "--identity", alice.as_str()])
        .success();
    let after_alice = ws.state();

    ws.zkdrop(&[
        "claim",
        "run",
        "--identity",
        bob.as_str(),
        "--prepared",
        "claim-prepared.json",
    ])
    .failure();
    assert_eq!(ws.state(), after_alice);
}

#[test]
fn unknown_identity_cannot_claim() {
    let ws = Workspace::new();
    ws.setup(&[]);
    let outsider = ws.generate_key("outsider");

    ws.zkdrop(&["claim", "check-inclusion", "--identity", outsider.as_str()])
        .failure();
    ws.zkdrop(&["claim", "run", "--identity", outsider.as_str()])
        .failure();
}

#[test]
fn reward_claim_mint_and_transfer() {
    let ws = Workspace::new();
    let Setup { admin, alice, bob } = ws.setup(&["--claim-reward", "100"]);

    // A reward deployment needs a voucher.
    ws.zkdrop(&["claim", "run", "--identity", alice.as_str()])
        .failure();

    ws.zkdrop(&[
        "voucher",
        "sign",
        "--admin-key",
        "admin.key",
        "--recipient",
        alice.as_str(),
        "--amount",
        "100",
        "--claim-reward",
    ])
    .success();
    ws.zkdrop(&[
        "claim",
        "run",
        "--identity",
        alice.as_str(),
        "--voucher",
        "voucher.json",
    ])
    .success();
    let state = ws.state();
    assert_eq!(state["total_supply"], 100);
    assert_eq!(balance_of(&state, &alice), 100);

    // The spent reward voucher does not authorize a standalone mint.
    ws.zkdrop(&["token", "mint", "--voucher", "voucher.json"])
        .failure();
    assert_eq!(ws.state()["total_supply"], 100);

    // Non-admin keys cannot sign vouchers.
    ws.zkdrop(&[
        "voucher",
        "sign",
        "--admin-key",
        "bob.key",
        "--recipient",
        bob.as_str(),
        "--amount",
        "5",
        "--output",
        "forged.json",
    ])
    .failure();

    ws.zkdrop(&[
        "voucher",
        "sign",
        "--admin-key",
        "admin.key",
        "--recipient",
        admin.as_str(),
        "--amount",
        "50",
        "--output",
        "mint.json",
    ])
    .success();
    ws.zkdrop(&["token", "mint", "--voucher", "mint.json"])
        .success();

    ws.zkdrop(&[
        "token",
        "send",
        "--from",
        alice.as_str(),
        "--to",
        bob.as_str(),
        "--amount",
        "30",
    ])
    .success();
    ws.zkdrop(&[
        "token",
        "send",
        "--from",
        bob.as_str(),
        "--to",
        alice.as_str(),
        "--amount",
        "31",
    ])
    .failure();
    ws.zkdrop(&["token", "balance", "--account", bob.as_str()])
        .success();

    let state = ws.state();
    assert_eq!(state["total_supply"], 150);
    assert_eq!(balance_of(&state, &alice), 70);
    assert_eq!(balance_of(&state, &bob), 30);
    assert_eq!(balance_of(&state, &admin), 50);
}

#[test]
fn gated_commitment_requires_admin_key() {
    let ws = Workspace::new();
    let admin = ws.generate_key("admin");
    ws.generate_key("other");
    let root = "00".repeat(32);

    ws.zkdrop(&[
        "contract",
        "deploy",
        "--admin",
        admin.as_str(),
        "--gated-updates",
    ])
    .success();

    ws.zkdrop(&["contract", "set-commitment", "--root", root.as_str()])
        .failure();
    ws.zkdrop(&[
        "contract",
        "set-commitment",
        "--root",
        root.as_str(),
        "--admin-key",
        "other.key",
    ])
    .failure();
    ws.zkdrop(&[
        "contract",
        "set-commitment",
        "--root",
        root.as_str(),
        "--admin-key",
        "admin.key",
    ])
    .success();
}
