use chrono::NaiveDate;
use registry_ledger::*;

const REGISTRY: &str = include_str!("fixtures/registry.json");

fn registry() -> Vec<PropertyFile> {
    load_portfolio_from_str(REGISTRY).unwrap()
}

fn find<'a>(files: &'a [PropertyFile], file_no: &str) -> &'a PropertyFile {
    files.iter().find(|f| f.file_no == file_no).unwrap()
}

fn march_first() -> RenderPass {
    RenderPass::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
}

#[test]
fn test_statement_for_mixed_ledger() {
    let files = registry();
    let file = find(&files, "DG-1042");
    let statement = march_first().statement(file);

    let plan: Vec<i64> = statement.groups.payment_plan.iter().map(|t| t.sequence).collect();
    let others: Vec<i64> = statement.groups.others.iter().map(|t| t.sequence).collect();
    assert_eq!(plan, vec![3, 2, 4, 5, 6, 7]);
    assert_eq!(others, vec![1, 9]);

    let totals = statement.totals;
    assert_eq!(totals.plan_receivable, 3_000_000.0);
    assert_eq!(totals.plan_received, 1_300_000.0);
    assert_eq!(totals.plan_surcharge, 8_750.0);
    assert_eq!(totals.other_receivable, 25_000.0);
    assert_eq!(totals.other_received, 25_000.0);
    assert_eq!(totals.grand_receivable, 3_025_000.0);
    assert_eq!(totals.grand_received, 1_325_000.0);
    assert_eq!(totals.grand_balance, 1_700_000.0);
    assert_eq!(format_amount(Some(totals.grand_balance)), "1,700,000");
}

#[test]
fn test_partition_is_complete_and_disjoint() {
    for file in registry() {
        let groups = LedgerAggregator::group(&file.transactions);
        assert_eq!(groups.len(), file.transactions.len());
        assert!(groups.payment_plan.iter().all(|t| t.installment_number > 0));
        assert!(groups.others.iter().all(|t| t.installment_number == 0));
    }
}

#[test]
fn test_overpaid_file_clamps_only_grand_balance() {
    let files = registry();
    let statement = build_statement(find(&files, "DG-3001"));

    assert_eq!(statement.totals.plan_balance(), -500_000.0);
    assert_eq!(statement.totals.grand_balance, 0.0);
}

#[test]
fn test_grand_balance_never_negative() {
    let overpaid = |paid: f64| Transaction {
        installment_number: 1,
        receivable: Some(100.0),
        amount_paid: Some(paid),
        ..Default::default()
    };

    for paid in [0.0, 50.0, 100.0, 150.0, 1e9] {
        let totals = LedgerAggregator::totals(&LedgerAggregator::group(&[overpaid(paid)]));
        assert!(totals.grand_balance >= 0.0, "paid {} gave {}", paid, totals.grand_balance);
    }
}

#[test]
fn test_dashboard_for_registry() {
    let files = registry();
    let dashboard = march_first().dashboard(&files);

    let statuses: Vec<&str> = dashboard.cards.iter().map(|c| c.status.label()).collect();
    assert_eq!(
        statuses,
        vec!["Action Required", "Active Ledger", "Clearance Verified"]
    );

    assert_eq!(dashboard.alerts.len(), 2);
    assert_eq!(dashboard.alerts[0].file_no, "DG-1042");
    assert_eq!(dashboard.alerts[0].kind, AlertKind::Overdue);
    assert_eq!(dashboard.alerts[0].transaction.installment_name, "2nd Installment");
    assert_eq!(dashboard.alerts[0].display_amount(), 250_000.0);

    assert_eq!(dashboard.alerts[1].file_no, "DG-2210");
    assert_eq!(dashboard.alerts[1].kind, AlertKind::Upcoming);
    assert_eq!(
        dashboard.alerts[1].due_date(),
        NaiveDate::from_ymd_opt(2024, 4, 10)
    );
    assert_eq!(dashboard.alerts[1].display_amount(), 1_000_000.0);

    assert_eq!(
        dashboard.stats,
        DashboardStats {
            verified_assets: 3,
            active_records: 2,
            overdue_alerts: 1,
        }
    );
}

#[test]
fn test_overdue_highlighting_follows_authoritative_balance() {
    let files = registry();
    let pass = march_first();
    let statement = pass.statement(find(&files, "DG-1042"));
    let flagged: Vec<i64> = pass.overdue_lines(&statement).iter().map(|t| t.sequence).collect();

    // The down payment lines are past due but the registry reports them settled.
    assert_eq!(flagged, vec![5]);

    let statuses: Vec<LineStatus> = statement
        .groups
        .payment_plan
        .iter()
        .map(|t| line_status(t, pass.today()))
        .collect();
    assert_eq!(
        statuses,
        vec![
            LineStatus::Settled,
            LineStatus::Settled,
            LineStatus::Settled,
            LineStatus::Overdue,
            LineStatus::PendingFuture,
            LineStatus::Unscheduled,
        ]
    );
}

#[test]
fn test_recomputation_is_stable_and_input_untouched() {
    let files = registry();
    let before = files.clone();
    let pass = march_first();

    let first: Vec<Statement> = files.iter().map(|f| pass.statement(f)).collect();
    let second: Vec<Statement> = files.iter().map(|f| pass.statement(f)).collect();

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
    assert_eq!(
        serde_json::to_string(&pass.dashboard(&files).alerts).unwrap(),
        serde_json::to_string(&pass.dashboard(&files).alerts).unwrap()
    );
    assert_eq!(files, before);
}

#[test]
fn test_statements_can_be_built_in_parallel() {
    let files = registry();
    let sequential: Vec<Statement> = files.iter().map(build_statement).collect();

    let parallel: Vec<Statement> = std::thread::scope(|scope| {
        let handles: Vec<_> = files
            .iter()
            .map(|file| scope.spawn(move || build_statement(file)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
}

#[test]
fn test_client_scoped_dashboard() {
    let files = registry();
    let client = User {
        id: "u-ayesha".to_string(),
        cnic: "35202-1234567-1".to_string(),
        name: "Ayesha Khan".to_string(),
        role: UserRole::Client,
    };

    let owned: Vec<PropertyFile> = visible_files(&files, &client).into_iter().cloned().collect();
    assert_eq!(owned.len(), 2);

    let pass = march_first();
    let notes = pass.notifications(&owned, &client.id);
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].notification_type, NotificationType::Critical);
    assert_eq!(notes[1].notification_type, NotificationType::Warning);
    assert_eq!(unread_count(&notes), 2);
}

#[test]
fn test_empty_inputs_are_normal_states() {
    let pass = march_first();
    let dashboard = pass.dashboard(&[]);
    assert!(dashboard.alerts.is_empty());
    assert!(dashboard.cards.is_empty());

    let empty = load_portfolio_from_str("[]").unwrap();
    assert!(empty.is_empty());
    assert!(pass.notifications(&empty, "u").is_empty());
}
