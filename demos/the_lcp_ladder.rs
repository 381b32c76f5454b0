use prefix_doubling_sa::SuffixArrayConstruction;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // run with RUST_LOG=debug to see the number of prefix doubling rounds
    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("barnabasbabblesaboutbananas"));

    // first, we create the suffix array
    let suffix_array = SuffixArrayConstruction::for_text(text.as_bytes())
        .in_owned_buffer32()
        .run()
        .unwrap();

    // then we can compute the lcp array from the suffix array and the text it keeps a reference to
    let suffix_array_and_lcp = suffix_array.lcp_construction().run().unwrap();

    // we can destructure the returned object and drop the text reference
    let (suffix_array, lcp, _) = suffix_array_and_lcp.into_parts();

    println!("Suffix array: {suffix_array:?}");

    // the first entry is always 0, because the smallest suffix has no predecessor
    println!(
        "Longest common prefix array: {:?}",
        lcp.get(1..).unwrap_or_default()
    );
}
