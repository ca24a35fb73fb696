pub mod phred;
