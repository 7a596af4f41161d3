pub mod image_folder_dataset;
