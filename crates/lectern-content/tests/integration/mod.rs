mod catalog_files;
mod fs_loader;
