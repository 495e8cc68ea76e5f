use kunitz_hmm::pipeline::Pipeline;

#[test]
fn full_pipeline_stage_order() {
    let names = Pipeline::full().stage_names();
    assert_eq!(
        names,
        vec![
            "stage0_scaffold",
            "stage1_training",
            "stage2_msa",
            "stage3_hmmbuild",
            "stage4_validation",
            "stage5_search",
            "stage6_hits",
            "stage7_evaluate",
            "stage8_entropy",
            "stage9_output",
        ]
    );
}
