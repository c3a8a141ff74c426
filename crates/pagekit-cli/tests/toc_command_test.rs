use assert_cmd::cargo::cargo_bin_cmd;
use pagekit_testing::{TestWorld, assertions, fixtures};
use predicates::prelude::*;

#[test]
fn toc_lists_top_level_headings_by_default() -> anyhow::Result<()> {
    let world = TestWorld::new();
    let page = world.write_page("staking.md", fixtures::STAKING_PAGE)?;

    let result = world.run(&["--format", "json", "toc", &page.display().to_string()])?;
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json()?;
    assertions::assert_anchor_ids(
        &json,
        &["what-is-staking", "solo-staking", "staking-pools", "faq"],
    )?;
    Ok(())
}

#[test]
fn toc_max_depth_includes_nested_and_marks_active() -> anyhow::Result<()> {
    let world = TestWorld::new();
    let page = world.write_page("staking.md", fixtures::STAKING_PAGE)?;

    let mut cmd = cargo_bin_cmd!("pagekit");
    world
        .configure_command(&mut cmd)
        .arg("toc")
        .arg(&page)
        .args(["--max-depth", "2", "--fragment", "#rewards"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(">   Rewards  #rewards"))
        .stdout(predicate::str::contains("  What is staking?  #what-is-staking"));
    Ok(())
}

#[test]
fn toc_config_depth_applies_without_flag() -> anyhow::Result<()> {
    let world = TestWorld::new().with_config("[toc]\nmax_depth = 2\n");
    let page = world.write_page("staking.md", fixtures::STAKING_PAGE)?;

    let result = world.run(&["--format", "json", "toc", &page.display().to_string()])?;
    let json = result.json()?;
    assertions::assert_anchor_ids(
        &json,
        &["what-is-staking", "rewards", "solo-staking", "staking-pools", "faq"],
    )?;
    assert_eq!(json["content"]["entries"][1]["nested"], true);
    Ok(())
}

#[test]
fn toc_warns_about_derived_anchor() -> anyhow::Result<()> {
    let world = TestWorld::new();
    let page = world.write_page("staking.md", fixtures::STAKING_PAGE)?;

    let result = world.run(&["toc", &page.display().to_string()])?;
    assert!(result.success());
    assertions::assert_stdout_contains(&result, "without a custom ID")?;
    assert!(result.stderr().contains("missing custom ID on heading"));
    Ok(())
}

#[test]
fn toc_single_heading_ignores_depth() -> anyhow::Result<()> {
    let world = TestWorld::new();
    let page = world.write_page("single.md", "# Title\n\n#### Deep dive {#deep}\n")?;

    let result = world.run(&["--format", "json", "toc", &page.display().to_string()])?;
    assertions::assert_anchor_ids(&result.json()?, &["deep"])?;
    Ok(())
}

#[test]
fn toc_missing_file_fails() {
    let world = TestWorld::new();

    let mut cmd = cargo_bin_cmd!("pagekit");
    world.configure_command(&mut cmd).args(["toc", "nope.md"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to read nope.md"));
}
