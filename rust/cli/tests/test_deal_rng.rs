use hilo_cli::run;

#[test]
fn deal_with_seed_is_deterministic() {
    let mut out1: Vec<u8> = Vec::new();
    let mut out2: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();

    let code1 = run(["hilo", "deal", "--seed", "42"], &mut out1, &mut err);
    let code2 = run(["hilo", "deal", "--seed", "42"], &mut out2, &mut err);

    assert_eq!(code1, 0);
    assert_eq!(code2, 0);
    assert_eq!(out1, out2, "same seed must produce identical output");
}

#[test]
fn deal_output_shows_the_table() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();

    let code = run(["hilo", "deal", "--seed", "7"], &mut out, &mut err);
    assert_eq!(code, 0);

    let stdout = String::from_utf8_lossy(&out);
    assert!(stdout.contains("Seed: 7"));
    assert!(stdout.contains("Current card:"));
    assert!(stdout.contains("Cards left: 51"));
    assert!(stdout.contains("Chips: 3"));
}

#[test]
fn deal_seed_lines_differ_across_seeds() {
    let mut out1: Vec<u8> = Vec::new();
    let mut out2: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();

    run(["hilo", "deal", "--seed", "1"], &mut out1, &mut err);
    run(["hilo", "deal", "--seed", "2"], &mut out2, &mut err);

    assert_ne!(out1, out2);
}

#[test]
fn deal_without_seed_still_deals_a_full_table() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();

    let code = run(["hilo", "deal"], &mut out, &mut err);
    assert_eq!(code, 0);

    let stdout = String::from_utf8_lossy(&out);
    assert!(stdout.contains("Cards left: 51"));
}
