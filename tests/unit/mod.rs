pub mod workbench_test;
