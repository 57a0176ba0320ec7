#![no_main]
use appy_dates::fuzzing::{run_fuzz_range, Data};
use libfuzzer_sys::{fuzz_target, Corpus};

fuzz_target!(|data: Data| -> Corpus {
    if run_fuzz_range(data) {
        Corpus::Keep
    } else {
        Corpus::Reject
    }
});
