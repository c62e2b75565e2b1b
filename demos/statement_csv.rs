use anyhow::{Context, Result};
use registry_ledger::*;
use std::path::PathBuf;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tests/fixtures/registry.json"));
    let file_no = args.next();

    let files = load_portfolio_from_path(&path)
        .with_context(|| format!("reading registry export {}", path.display()))?;

    let file = match &file_no {
        Some(no) => files
            .iter()
            .find(|f| &f.file_no == no)
            .with_context(|| format!("file {} not in export", no))?,
        None => files.first().context("registry export is empty")?,
    };

    let pass = RenderPass::starting_now();
    let statement = pass.statement(file);

    let mut writer = csv::Writer::from_writer(std::io::stdout());
    writer.write_record([
        "Group",
        "Due Date",
        "Int No",
        "Installment Type",
        "Receivable",
        "Receipt Date",
        "Mode of Payment",
        "Instrument No",
        "Amount",
        "OS Balance",
        "Surcharge",
        "Overdue",
    ])?;

    let groups = [
        ("Payment Plan", &statement.groups.payment_plan),
        ("Other", &statement.groups.others),
    ];

    for (group, lines) in groups {
        for t in lines {
            writer.write_record([
                group.to_string(),
                t.due_date.clone(),
                t.installment_number.to_string(),
                t.installment_name.clone(),
                format_amount(t.receivable),
                t.receipt_date.clone().unwrap_or_default(),
                t.payment_mode.clone().unwrap_or_default(),
                t.instrument_number.clone().unwrap_or_default(),
                format_amount(t.amount_paid),
                format_amount(t.outstanding_balance),
                format_amount(t.surcharge),
                is_overdue(t, pass.today()).to_string(),
            ])?;
        }
    }

    let totals = statement.totals;
    writer.write_record([
        "Total".to_string(),
        String::new(),
        String::new(),
        String::new(),
        format_amount(Some(totals.grand_receivable)),
        String::new(),
        String::new(),
        String::new(),
        format_amount(Some(totals.grand_received)),
        format_amount(Some(totals.grand_balance)),
        format_amount(Some(totals.plan_surcharge)),
        String::new(),
    ])?;
    writer.flush()?;

    eprintln!(
        "{}: {} as of {}",
        statement.file_no,
        file_status(file, pass.today()),
        format_sap_date(pass.today())
    );

    Ok(())
}
