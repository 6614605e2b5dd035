fn main() {
    multiversx_sc_meta_lib::cli_main::<installment_escrow::AbiProvider>();
}
